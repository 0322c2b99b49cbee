use serde::{Deserialize, Serialize};

// https://docs.anthropic.com/en/api/messages

#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageParams {
    /// The model that will complete the prompt.
    pub model: String,
    /// The maximum number of tokens to generate before stopping.
    pub max_tokens: u32,
    /// Input messages. Only a single user turn is ever sent.
    pub messages: Vec<InputMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Content generated by the model, as a list of typed blocks.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// Only `text` blocks are read; other block kinds (`tool_use`, `thinking`,
/// ...) carry no `text` and are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}
