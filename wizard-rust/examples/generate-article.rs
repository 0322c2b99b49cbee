use articleforge_wizard::{Dataset, Wizard, WizardState};
use dotenvy::dotenv;

mod common;

/// Usage: generate-article <keywords.csv> <samples.txt> <guidelines>
#[tokio::main]
async fn main() {
    dotenv().ok();
    common::init_tracing();

    let mut args = std::env::args().skip(1);
    let csv_path = args.next().expect("path to the keyword CSV export");
    let samples_path = args.next().expect("path to a file with sample articles");
    let guidelines = args.next().expect("writing guidelines");

    let csv = std::fs::read_to_string(csv_path).unwrap();
    let samples = std::fs::read_to_string(samples_path).unwrap();

    let wizard = Wizard::new(common::get_client());

    let state = WizardState::new()
        .load_dataset(Dataset::parse(&csv).unwrap())
        .unwrap();

    let state = wizard.propose_keywords(&state).await.unwrap();
    let selection = state.selection().unwrap();
    eprintln!("Theme: {}", selection.suggested_theme);
    eprintln!("Reasoning: {}", selection.reasoning);
    eprintln!("Keywords:\n{}", state.keywords_text());

    let state = state
        .confirm_keywords()
        .unwrap()
        .submit_style_samples(samples)
        .unwrap()
        .submit_guidelines(guidelines)
        .unwrap();

    let state = wizard.generate_article(&state).await.unwrap();
    let document = state.document().unwrap();

    eprintln!(
        "Document ready ({}, {})",
        document.file_name(),
        document.content_type()
    );
    println!("{document}");
}
