use std::{collections::VecDeque, sync::Mutex};

use crate::{Backend, Credentials, GenerationError, GenerationResult};

/// Result for a mocked `send` call.
/// It can either be the raw model text or an error to return.
pub enum MockSendResult {
    Text(String),
    Error(GenerationError),
}

impl MockSendResult {
    /// Construct a result that yields the provided raw text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: GenerationError) -> Self {
        Self::Error(error)
    }
}

impl From<String> for MockSendResult {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<&str> for MockSendResult {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<GenerationError> for MockSendResult {
    fn from(error: GenerationError) -> Self {
        Self::error(error)
    }
}

/// What a mocked backend was asked to send.
#[derive(Debug, Clone)]
pub struct MockSendInput {
    pub prompt: String,
    pub max_output_tokens: u32,
    pub credentials: Option<Credentials>,
}

#[derive(Default)]
struct MockBackendState {
    mocked_results: VecDeque<MockSendResult>,
    tracked_inputs: Vec<MockSendInput>,
}

/// A mock backend for testing that tracks inputs and yields predefined
/// outputs in order.
pub struct MockBackend {
    provider: &'static str,
    model_id: String,
    state: Mutex<MockBackendState>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            provider: "mock",
            model_id: "mock-model".to_string(),
            state: Mutex::new(MockBackendState::default()),
        }
    }
}

impl MockBackend {
    /// Construct a new mock backend instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the provider identifier returned by the mock.
    pub fn set_provider(&mut self, provider: &'static str) {
        self.provider = provider;
    }

    /// Enqueue a result for the next `send` call.
    ///
    /// # Panics
    /// Panics if the internal state lock is poisoned.
    pub fn enqueue(&self, result: impl Into<MockSendResult>) -> &Self {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.push_back(result.into());
        self
    }

    /// Inputs received so far, in call order.
    ///
    /// # Panics
    /// Panics if the internal state lock is poisoned.
    #[must_use]
    pub fn tracked_inputs(&self) -> Vec<MockSendInput> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_inputs.clone()
    }

    /// Number of results that have not been consumed yet.
    ///
    /// # Panics
    /// Panics if the internal state lock is poisoned.
    #[must_use]
    pub fn pending_results(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.mocked_results.len()
    }
}

#[async_trait::async_trait]
impl Backend for MockBackend {
    fn provider(&self) -> &'static str {
        self.provider
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
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_inputs.push(MockSendInput {
            prompt: prompt.to_string(),
            max_output_tokens,
            credentials: credentials.cloned(),
        });

        let result = state.mocked_results.pop_front().ok_or_else(|| {
            GenerationError::Invariant(self.provider, "no mocked send results available".into())
        })?;

        match result {
            MockSendResult::Text(text) => Ok(text),
            MockSendResult::Error(error) => Err(error),
        }
    }
}
