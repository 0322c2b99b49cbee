use articleforge_sdk::{BackendKind, BackendSelection, Credentials, GenerationClient};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build a client for the backend named by `ARTICLEFORGE_BACKEND`
/// (`anthropic`, `xai` or `lmstudio`; defaults to `lmstudio`).
pub fn get_client() -> GenerationClient {
    let kind: BackendKind = std::env::var("ARTICLEFORGE_BACKEND")
        .unwrap_or_else(|_| "lmstudio".to_string())
        .parse()
        .expect("ARTICLEFORGE_BACKEND must be anthropic, xai or lmstudio");

    let credentials = match kind {
        BackendKind::Anthropic => Some(
            std::env::var("ANTHROPIC_API_KEY")
                .expect("ANTHROPIC_API_KEY environment variable must be set"),
        ),
        BackendKind::Xai => Some(
            std::env::var("XAI_API_KEY").expect("XAI_API_KEY environment variable must be set"),
        ),
        BackendKind::Local => None,
    };

    let selection = BackendSelection::new(kind, credentials.map(Credentials::new))
        .expect("backend selection should be valid");
    GenerationClient::new(selection)
}
