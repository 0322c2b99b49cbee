use crate::{
    anthropic::api::{CreateMessageParams, InputMessage, Message},
    client_utils, Backend, Credentials, GenerationError, GenerationResult,
};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "anthropic";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const DEFAULT_API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL_ID: &str = "claude-3-5-sonnet-20240620";
const FALLBACK_ERROR_MESSAGE: &str = "Anthropic API error";

pub struct AnthropicBackend {
    model_id: String,
    base_url: String,
    api_version: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct AnthropicBackendOptions {
    pub base_url: Option<String>,
    pub model_id: Option<String>,
    pub api_version: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl AnthropicBackend {
    #[must_use]
    pub fn new(mut options: AnthropicBackendOptions) -> Self {
        let base_url = options
            .base_url
            .take()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let api_version = options
            .api_version
            .take()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let model_id = options
            .model_id
            .take()
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        Self {
            model_id,
            base_url,
            api_version,
            client: options.client.unwrap_or_default(),
            headers: options.headers.unwrap_or_default(),
        }
    }

    fn request_headers(&self, credentials: Option<&Credentials>) -> GenerationResult<HeaderMap> {
        let credentials = credentials.ok_or_else(|| {
            GenerationError::InvalidInput("An API key is required for the anthropic backend".into())
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            client_utils::secret_header_value(credentials.expose(), PROVIDER)?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&self.api_version).map_err(|error| {
                GenerationError::InvalidInput(format!(
                    "Invalid Anthropic version header value: {error}"
                ))
            })?,
        );

        client_utils::insert_extra_headers(&mut headers, &self.headers, PROVIDER)?;

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl Backend for AnthropicBackend {
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

        let payload = CreateMessageParams {
            model: self.model_id.clone(),
            max_tokens: max_output_tokens,
            messages: vec![InputMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response: Message = client_utils::send_json(
            &self.client,
            &format!("{}/v1/messages", self.base_url),
            &payload,
            headers,
            PROVIDER,
            FALLBACK_ERROR_MESSAGE,
        )
        .await?;

        Ok(join_text_blocks(response))
    }
}

fn join_text_blocks(message: Message) -> String {
    message
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join("\n")
}
