use crate::{
    anthropic::{AnthropicBackend, AnthropicBackendOptions},
    chat_completions::{LocalBackend, LocalBackendOptions, XaiBackend, XaiBackendOptions},
    structured_output, Backend, BackendKind, BackendSelection, GenerationRequest,
    GenerationResult,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Sends prompts to the backend selected for the session and returns the
/// JSON object found in the model output.
///
/// Each call is a single attempt: no retry, no backoff and no timeout beyond
/// what the underlying HTTP client enforces.
#[derive(Clone)]
pub struct GenerationClient {
    selection: BackendSelection,
    backend: Arc<dyn Backend>,
}

impl GenerationClient {
    /// Build a client that talks to the default endpoint of the selected
    /// backend.
    #[must_use]
    pub fn new(selection: BackendSelection) -> Self {
        let backend: Arc<dyn Backend> = match selection.kind() {
            BackendKind::Anthropic => {
                Arc::new(AnthropicBackend::new(AnthropicBackendOptions::default()))
            }
            BackendKind::Xai => Arc::new(XaiBackend::new(XaiBackendOptions::default())),
            BackendKind::Local => Arc::new(LocalBackend::new(LocalBackendOptions::default())),
        };

        Self { selection, backend }
    }

    /// Build a client around an already configured backend.
    pub fn with_backend(selection: BackendSelection, backend: Arc<dyn Backend>) -> Self {
        Self { selection, backend }
    }

    #[must_use]
    pub fn selection(&self) -> &BackendSelection {
        &self.selection
    }

    pub async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> GenerationResult<Map<String, Value>> {
        let request = GenerationRequest::new(prompt, max_output_tokens, &self.selection)?;
        let provider = self.backend.provider();
        let model_id = self.backend.model_id();

        crate::opentelemetry::trace_generate(
            provider,
            &model_id,
            request,
            |request| async move {
                self.backend
                    .send(
                        &request.prompt,
                        request.max_output_tokens,
                        request.credentials.as_ref(),
                    )
                    .await
            },
            structured_output::extract_json_object,
        )
        .await
    }

    /// Same as [`generate`](Self::generate), then decode the object into `T`.
    pub async fn generate_object<T: DeserializeOwned>(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> GenerationResult<T> {
        let object = self.generate(prompt, max_output_tokens).await?;
        structured_output::decode_object(object)
    }
}
