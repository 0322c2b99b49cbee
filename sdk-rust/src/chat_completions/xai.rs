use super::api::{
    ChatCompletionRequestMessage, CreateChatCompletionRequest, CreateChatCompletionResponse,
};
use crate::{client_utils, Backend, Credentials, GenerationError, GenerationResult};
use reqwest::{
    header::{self, HeaderMap},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "xai";
const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";
const DEFAULT_MODEL_ID: &str = "grok-beta";
const FALLBACK_ERROR_MESSAGE: &str = "xAI API error";

pub struct XaiBackend {
    model_id: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct XaiBackendOptions {
    pub base_url: Option<String>,
    pub model_id: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl XaiBackend {
    #[must_use]
    pub fn new(options: XaiBackendOptions) -> Self {
        let XaiBackendOptions {
            base_url,
            model_id,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            model_id: model_id.unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            base_url,
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
        }
    }

    fn request_headers(&self, credentials: Option<&Credentials>) -> GenerationResult<HeaderMap> {
        let credentials = credentials.ok_or_else(|| {
            GenerationError::InvalidInput("An API key is required for the xai backend".into())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            client_utils::secret_header_value(
                &format!("Bearer {}", credentials.expose()),
                PROVIDER,
            )?,
        );

        client_utils::insert_extra_headers(&mut headers, &self.headers, PROVIDER)?;

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl Backend for XaiBackend {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn send(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        credentials: Option<&Credentials>,
    ) -> GenerationResult<String> {
        let headers = self.request_headers(credentials)?;

        let request = CreateChatCompletionRequest {
            model: Some(self.model_id.clone()),
            messages: vec![ChatCompletionRequestMessage::user(prompt)],
            temperature: 0.0,
            max_tokens: max_output_tokens,
            stream: None,
        };

        let response: CreateChatCompletionResponse = client_utils::send_json(
            &self.client,
            &format!("{}/chat/completions", self.base_url),
            &request,
            headers,
            PROVIDER,
            FALLBACK_ERROR_MESSAGE,
        )
        .await?;

        response.into_first_content(PROVIDER)
    }
}
