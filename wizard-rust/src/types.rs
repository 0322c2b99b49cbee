use serde::{Deserialize, Serialize};

/// The keywords the model picked from the dataset (Stage A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct KeywordSelection {
    /// Between 10 and 18 terms are requested. The count is not checked.
    pub selected_terms: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub suggested_theme: String,
}

/// How the user's sample articles are written. Only used to build the
/// article prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct StyleProfile {
    pub style: String,
    pub tone: String,
    pub structure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub meta_description: String,
    pub introduction: String,
    pub sections: Vec<ArticleSection>,
    pub conclusion: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ArticleSection {
    pub heading: String,
    pub content: String,
}
