use super::api::{
    ChatCompletionRequestMessage, CreateChatCompletionRequest, CreateChatCompletionResponse,
};
use crate::{client_utils, Backend, Credentials, GenerationError, GenerationResult};
use reqwest::{header::HeaderMap, Client};
use std::collections::HashMap;

const PROVIDER: &str = "lmstudio";
const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";
const DEFAULT_MODEL_ID: &str = "local-model";
const TEMPERATURE: f64 = 0.7;

/// A local OpenAI-compatible server such as LM Studio. No authentication is
/// sent, and the model is whichever one the server has loaded.
pub struct LocalBackend {
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct LocalBackendOptions {
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl LocalBackend {
    #[must_use]
    pub fn new(options: LocalBackendOptions) -> Self {
        let base_url = options
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            client: options.client.unwrap_or_default(),
            headers: options.headers.unwrap_or_default(),
        }
    }

    fn unavailable(&self, detail: &str) -> GenerationError {
        GenerationError::BackendUnavailable(format!(
            "The local model server is not reachable at {} ({detail}). Make sure LM Studio is \
             open and its local server is started on the expected port.",
            self.base_url
        ))
    }
}

#[async_trait::async_trait]
impl Backend for LocalBackend {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        DEFAULT_MODEL_ID.to_string()
    }

    async fn send(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        _credentials: Option<&Credentials>,
    ) -> GenerationResult<String> {
        let mut headers = HeaderMap::new();
        client_utils::insert_extra_headers(&mut headers, &self.headers, PROVIDER)?;

        let request = CreateChatCompletionRequest {
            model: None,
            messages: vec![ChatCompletionRequestMessage::user(prompt)],
            temperature: TEMPERATURE,
            max_tokens: max_output_tokens,
            stream: Some(false),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                let detail = if error.is_connect() {
                    "connection refused".to_string()
                } else {
                    error.to_string()
                };
                self.unavailable(&detail)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unavailable(&format!("status {status}")));
        }

        let response: CreateChatCompletionResponse = response.json().await?;
        response.into_first_content(PROVIDER)
    }
}
