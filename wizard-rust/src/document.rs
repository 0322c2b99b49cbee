use crate::Article;
use std::fmt;

/// File name offered when the article is downloaded.
pub const DOCUMENT_FILE_NAME: &str = "article-blog.md";
/// Content type of the downloaded article.
pub const DOCUMENT_CONTENT_TYPE: &str = "text/markdown";

/// An article flattened into a single markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    text: String,
}

impl ArticleDocument {
    #[must_use]
    pub fn render(article: &Article) -> Self {
        let mut blocks = vec![
            format!("# {}", article.title),
            format!("**Meta Description:** {}", article.meta_description),
            "---".to_string(),
            article.introduction.clone(),
        ];

        for section in &article.sections {
            blocks.push(format!("## {}", section.heading));
            blocks.push(section.content.clone());
        }

        blocks.push("## Conclusion".to_string());
        blocks.push(article.conclusion.clone());
        blocks.push("---".to_string());
        blocks.push(format!("**Keywords:** {}", article.keywords.join(", ")));

        Self {
            text: blocks.join("\n\n"),
        }
    }

    /// The text to put on the clipboard.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    #[must_use]
    pub fn file_name(&self) -> &'static str {
        DOCUMENT_FILE_NAME
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        DOCUMENT_CONTENT_TYPE
    }
}

impl fmt::Display for ArticleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
