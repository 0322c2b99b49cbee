use crate::{
    prompts, Article, ArticleDocument, KeywordSelection, StyleProfile, WizardError, WizardResult,
    WizardStage, WizardState,
};
use articleforge_sdk::GenerationClient;

/// Runs the generation stages of the workflow against one backend.
///
/// Calls are issued one at a time: each transition awaits its generation
/// before returning, and the two calls of the article stage are sequential
/// because the second prompt embeds the result of the first.
#[derive(Clone)]
pub struct Wizard {
    client: GenerationClient,
}

impl Wizard {
    #[must_use]
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &GenerationClient {
        &self.client
    }

    /// Stage A: let the model pick keywords from the loaded dataset.
    ///
    /// The proposed terms also become the editable keyword list.
    pub async fn propose_keywords(&self, state: &WizardState) -> WizardResult<WizardState> {
        state.expect_stage(WizardStage::DatasetPending, "propose keywords")?;
        let dataset = state
            .dataset
            .as_ref()
            .ok_or(WizardError::MissingInput("dataset"))?;

        let prompt = prompts::keyword_selection(dataset)?;
        let selection: KeywordSelection = self
            .client
            .generate_object(&prompt, prompts::KEYWORD_SELECTION_MAX_TOKENS)
            .await?;

        tracing::info!(
            terms = selection.selected_terms.len(),
            theme = %selection.suggested_theme,
            "keywords proposed"
        );

        Ok(WizardState {
            keywords: selection.selected_terms.clone(),
            selection: Some(selection),
            ..state.advance(WizardStage::KeywordsProposed)
        })
    }

    /// Stage B: analyze the style samples, then write the article.
    pub async fn generate_article(&self, state: &WizardState) -> WizardResult<WizardState> {
        state.expect_stage(WizardStage::GuidelinesCollected, "generate the article")?;

        let style: StyleProfile = self
            .client
            .generate_object(
                &prompts::style_analysis(&state.style_samples),
                prompts::STYLE_ANALYSIS_MAX_TOKENS,
            )
            .await?;
        tracing::debug!(tone = %style.tone, "style analyzed");

        let prompt = prompts::article(&state.keywords, &style, &state.guidelines)?;
        let article: Article = self
            .client
            .generate_object(&prompt, prompts::ARTICLE_MAX_TOKENS)
            .await?;
        tracing::info!(
            title = %article.title,
            sections = article.sections.len(),
            "article generated"
        );

        let document = ArticleDocument::render(&article);

        Ok(WizardState {
            style_profile: Some(style),
            article: Some(article),
            document: Some(document),
            ..state.advance(WizardStage::ArticleReady)
        })
    }
}
