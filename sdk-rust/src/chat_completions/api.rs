use crate::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};

// Subset of the OpenAI chat completions schema shared by xAI and LM Studio.
// https://platform.openai.com/docs/api-reference/chat

#[derive(Debug, Clone, Serialize)]
pub struct CreateChatCompletionRequest {
    /// Omitted for local servers, which answer with whatever model is loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<ChatCompletionRequestMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequestMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatCompletionRequestMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user",
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CreateChatCompletionResponse {
    /// Text of the first choice. A choice without content yields an empty
    /// string.
    pub fn into_first_content(self, provider: &'static str) -> GenerationResult<String> {
        let choice = self.choices.into_iter().next().ok_or_else(|| {
            GenerationError::Invariant(provider, "No choices in response".to_string())
        })?;

        Ok(choice.message.content.unwrap_or_default())
    }
}
