use articleforge_sdk::{
    testing::{MockBackend, MockSendResult},
    BackendKind, BackendSelection, Credentials, GenerationClient, GenerationError,
    MalformedOutputError,
};
use articleforge_wizard::{
    prompts, Dataset, KeywordSelection, Wizard, WizardError, WizardStage, WizardState,
};
use regex::Regex;
use std::sync::Arc;

fn wizard(backend: &Arc<MockBackend>) -> Wizard {
    let selection =
        BackendSelection::new(BackendKind::Xai, Some(Credentials::new("xai-test"))).unwrap();
    Wizard::new(GenerationClient::with_backend(selection, backend.clone()))
}

fn loaded_state(csv: &str) -> WizardState {
    WizardState::new()
        .load_dataset(Dataset::parse(csv).unwrap())
        .unwrap()
}

#[tokio::test]
async fn stage_a_round_trips_selection() {
    let backend = Arc::new(MockBackend::new());
    backend.enqueue(
        "```json\n{\"selectedTerms\": [\"running shoes\", \"trail shoes\", \"hiking boots\"], \
         \"reasoning\": \"highest clicks\", \"suggestedTheme\": \"outdoor footwear\"}\n```",
    );
    let state = loaded_state("term,clicks\nrunning shoes,120\ntrail shoes,80\nhiking boots,40\n");

    let state = wizard(&backend).propose_keywords(&state).await.unwrap();

    let expected = KeywordSelection {
        selected_terms: vec![
            "running shoes".into(),
            "trail shoes".into(),
            "hiking boots".into(),
        ],
        reasoning: "highest clicks".into(),
        suggested_theme: "outdoor footwear".into(),
    };
    assert_eq!(state.stage(), WizardStage::KeywordsProposed);
    assert_eq!(state.selection(), Some(&expected));
    assert_eq!(state.keywords(), expected.selected_terms.as_slice());

    let inputs = backend.tracked_inputs();
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].max_output_tokens, prompts::KEYWORD_SELECTION_MAX_TOKENS);
    assert!(inputs[0].prompt.contains("AVAILABLE COLUMNS: term, clicks"));
    for term in &expected.selected_terms {
        assert!(inputs[0].prompt.contains(term.as_str()));
    }
}

#[tokio::test]
async fn stage_a_requires_a_dataset() {
    let backend = Arc::new(MockBackend::new());

    let error = wizard(&backend)
        .propose_keywords(&WizardState::new())
        .await
        .unwrap_err();

    assert!(matches!(error, WizardError::MissingInput("dataset")));
    assert!(backend.tracked_inputs().is_empty());
}

#[tokio::test]
async fn failed_stage_a_leaves_state_unchanged_and_can_be_retried() {
    let backend = Arc::new(MockBackend::new());
    backend
        .enqueue("I am sorry, I cannot help with that.")
        .enqueue(MockSendResult::error(GenerationError::BackendUnavailable(
            "down".into(),
        )))
        .enqueue(r#"{"selectedTerms": ["shoes"], "reasoning": "", "suggestedTheme": "shoes"}"#);
    let wizard = wizard(&backend);
    let state = loaded_state("term,clicks\nshoes,1\n");

    let error = wizard.propose_keywords(&state).await.unwrap_err();
    assert!(matches!(
        error,
        WizardError::Generation(GenerationError::MalformedOutput(
            MalformedOutputError::NoJsonObject
        ))
    ));
    let error = wizard.propose_keywords(&state).await.unwrap_err();
    assert!(matches!(
        error,
        WizardError::Generation(GenerationError::BackendUnavailable(_))
    ));
    assert_eq!(state.stage(), WizardStage::DatasetPending);

    let state = wizard.propose_keywords(&state).await.unwrap();
    assert_eq!(state.keywords(), ["shoes"]);
    assert_eq!(backend.tracked_inputs().len(), 3);
}

#[tokio::test]
async fn failed_style_call_leaves_state_unchanged() {
    let backend = Arc::new(MockBackend::new());
    backend.enqueue(r#"{"selectedTerms": ["shoes"]}"#);
    let wizard = wizard(&backend);
    let state = wizard
        .propose_keywords(&loaded_state("term\nshoes"))
        .await
        .unwrap()
        .confirm_keywords()
        .unwrap()
        .submit_style_samples("sample")
        .unwrap()
        .submit_guidelines("guidelines")
        .unwrap();

    backend.enqueue("no json");
    let error = wizard.generate_article(&state).await.unwrap_err();

    assert!(matches!(error, WizardError::Generation(_)));
    assert_eq!(state.stage(), WizardStage::GuidelinesCollected);
    assert!(state.article().is_none());
    assert_eq!(backend.tracked_inputs().len(), 2);
    assert_eq!(backend.pending_results(), 0);
}

#[tokio::test]
async fn generate_article_requires_guidelines_stage() {
    let backend = Arc::new(MockBackend::new());

    let error = wizard(&backend)
        .generate_article(&WizardState::new())
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        WizardError::InvalidTransition {
            stage: WizardStage::DatasetPending,
            ..
        }
    ));
    assert!(backend.tracked_inputs().is_empty());
}

#[tokio::test]
async fn end_to_end_article_generation() {
    let backend = Arc::new(MockBackend::new());
    backend
        .enqueue(
            r#"Here is my pick: {"selectedTerms": ["trail shoes", "running socks"], "reasoning": "best converting", "suggestedTheme": "trail running"}"#,
        )
        .enqueue(r#"{"style": "short paragraphs", "tone": "enthusiastic", "structure": "intro, tips, wrap-up"}"#)
        .enqueue(
            r#"```json
{
  "title": "Trail Running Essentials",
  "metaDescription": "Everything you need to hit the trails.",
  "introduction": "Trail running is booming.",
  "sections": [
    { "heading": "Choosing Your First Trail Shoes", "content": "Grip matters most." }
  ],
  "conclusion": "Lace up and go.",
  "keywords": ["trail shoes", "running socks", "hydration vest"]
}
```"#,
        );
    let wizard = wizard(&backend);

    let state = loaded_state(
        "term,clicks,conversions\n\
         trail shoes,300,12\n\
         running socks,150,9\n\
         road shoes,500,2\n\
         hydration vest,90,7\n\
         gps watch,60,1\n",
    );
    assert_eq!(state.dataset().unwrap().len(), 5);

    let state = wizard.propose_keywords(&state).await.unwrap();
    assert_eq!(state.keywords(), ["trail shoes", "running socks"]);

    let state = state
        .confirm_keywords()
        .unwrap()
        .edit_keywords_text("trail shoes\nrunning socks\nhydration vest")
        .unwrap();
    assert_eq!(state.keywords().len(), 3);

    let state = state
        .submit_style_samples("Our last post: Five tips for muddy trails...")
        .unwrap()
        .submit_guidelines("Target beginners, 1200 words, mention the spring sale.")
        .unwrap();

    let state = wizard.generate_article(&state).await.unwrap();
    assert_eq!(state.stage(), WizardStage::ArticleReady);
    assert_eq!(state.style_profile().unwrap().tone, "enthusiastic");

    let inputs = backend.tracked_inputs();
    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs[1].max_output_tokens, prompts::STYLE_ANALYSIS_MAX_TOKENS);
    assert!(inputs[1].prompt.contains("Five tips for muddy trails"));
    assert_eq!(inputs[2].max_output_tokens, prompts::ARTICLE_MAX_TOKENS);
    assert!(inputs[2].prompt.contains("trail shoes\nrunning socks\nhydration vest"));
    assert!(inputs[2].prompt.contains("\"tone\": \"enthusiastic\""));
    assert!(inputs[2].prompt.contains("mention the spring sale"));
    assert!(inputs[1].max_output_tokens < inputs[2].max_output_tokens);

    let document = state.document().unwrap().text();
    assert!(Regex::new(r"(?m)^# Trail Running Essentials$")
        .unwrap()
        .is_match(document));
    let headings: Vec<_> = Regex::new(r"(?m)^## (.+)$")
        .unwrap()
        .captures_iter(document)
        .map(|captures| captures[1].to_string())
        .filter(|heading| heading == "Choosing Your First Trail Shoes")
        .collect();
    assert_eq!(headings.len(), 1);

    let state = state.reset().unwrap();
    assert_eq!(state, WizardState::new());
}
