use crate::{
    Article, ArticleDocument, Dataset, KeywordSelection, StyleProfile, WizardError, WizardResult,
};

/// Where the user is in the workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WizardStage {
    /// Choosing a backend and uploading the keyword report.
    #[default]
    DatasetPending,
    /// The model proposed keywords; the user reviews them.
    KeywordsProposed,
    /// The user edits the keyword list.
    KeywordsConfirmed,
    StyleCollected,
    GuidelinesCollected,
    ArticleReady,
}

/// Everything entered or generated during one run.
///
/// Transitions never mutate a state in place: they return the next state,
/// so a failed transition leaves the caller with the state it had.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub(crate) stage: WizardStage,
    pub(crate) dataset: Option<Dataset>,
    pub(crate) selection: Option<KeywordSelection>,
    pub(crate) keywords: Vec<String>,
    pub(crate) style_samples: String,
    pub(crate) guidelines: String,
    pub(crate) style_profile: Option<StyleProfile>,
    pub(crate) article: Option<Article>,
    pub(crate) document: Option<ArticleDocument>,
}

impl WizardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> WizardStage {
        self.stage
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&KeywordSelection> {
        self.selection.as_ref()
    }

    /// The keyword list that will be sent to the article prompt.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The keyword list as editable text, one term per line.
    #[must_use]
    pub fn keywords_text(&self) -> String {
        self.keywords.join("\n")
    }

    #[must_use]
    pub fn style_samples(&self) -> &str {
        &self.style_samples
    }

    #[must_use]
    pub fn guidelines(&self) -> &str {
        &self.guidelines
    }

    #[must_use]
    pub fn style_profile(&self) -> Option<&StyleProfile> {
        self.style_profile.as_ref()
    }

    #[must_use]
    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    #[must_use]
    pub fn document(&self) -> Option<&ArticleDocument> {
        self.document.as_ref()
    }

    pub(crate) fn expect_stage(
        &self,
        expected: WizardStage,
        action: &'static str,
    ) -> WizardResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                stage: self.stage,
                action,
            })
        }
    }

    pub(crate) fn advance(&self, stage: WizardStage) -> Self {
        tracing::info!(from = ?self.stage, to = ?stage, "wizard stage changed");
        Self {
            stage,
            ..self.clone()
        }
    }

    /// Store the uploaded report. Replaces any previously loaded dataset.
    pub fn load_dataset(&self, dataset: Dataset) -> WizardResult<Self> {
        self.expect_stage(WizardStage::DatasetPending, "load a dataset")?;
        tracing::debug!(
            columns = dataset.headers().len(),
            rows = dataset.len(),
            "dataset loaded"
        );
        Ok(Self {
            dataset: Some(dataset),
            ..self.clone()
        })
    }

    pub fn confirm_keywords(&self) -> WizardResult<Self> {
        self.expect_stage(WizardStage::KeywordsProposed, "confirm keywords")?;
        Ok(self.advance(WizardStage::KeywordsConfirmed))
    }

    /// Replace the keyword list. Entries are trimmed and empty ones dropped.
    pub fn edit_keywords<I, S>(&self, keywords: I) -> WizardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.expect_stage(WizardStage::KeywordsConfirmed, "edit keywords")?;
        let keywords = keywords
            .into_iter()
            .map(|keyword| keyword.as_ref().trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        Ok(Self {
            keywords,
            ..self.clone()
        })
    }

    /// Replace the keyword list from text with one term per line.
    pub fn edit_keywords_text(&self, text: &str) -> WizardResult<Self> {
        self.edit_keywords(text.lines())
    }

    pub fn submit_style_samples(&self, samples: impl Into<String>) -> WizardResult<Self> {
        self.expect_stage(WizardStage::KeywordsConfirmed, "submit style samples")?;
        Ok(Self {
            style_samples: samples.into(),
            ..self.advance(WizardStage::StyleCollected)
        })
    }

    pub fn submit_guidelines(&self, guidelines: impl Into<String>) -> WizardResult<Self> {
        self.expect_stage(WizardStage::StyleCollected, "submit guidelines")?;
        let guidelines = guidelines.into();
        if guidelines.trim().is_empty() {
            return Err(WizardError::MissingInput("guidelines"));
        }
        Ok(Self {
            guidelines,
            ..self.advance(WizardStage::GuidelinesCollected)
        })
    }

    /// Go back one stage, keeping everything entered so far.
    pub fn back(&self) -> WizardResult<Self> {
        let previous = match self.stage {
            WizardStage::KeywordsProposed => WizardStage::DatasetPending,
            WizardStage::KeywordsConfirmed => WizardStage::KeywordsProposed,
            WizardStage::StyleCollected => WizardStage::KeywordsConfirmed,
            WizardStage::GuidelinesCollected => WizardStage::StyleCollected,
            WizardStage::DatasetPending | WizardStage::ArticleReady => {
                return Err(WizardError::InvalidTransition {
                    stage: self.stage,
                    action: "go back",
                })
            }
        };
        Ok(self.advance(previous))
    }

    /// Start a new run from scratch.
    pub fn reset(&self) -> WizardResult<Self> {
        self.expect_stage(WizardStage::ArticleReady, "start a new article")?;
        tracing::info!("wizard reset");
        Ok(Self::default())
    }
}
