use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    /// The request violates an invariant (non-positive token budget, missing
    /// credentials, credentials that cannot be sent as a header).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to a cloud backend failed before a status was received,
    /// or its response envelope could not be decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A cloud backend answered with a non-success status code.
    #[error("Backend error from {provider}: {message} (Status {status})")]
    BackendError {
        provider: &'static str,
        status: reqwest::StatusCode,
        message: String,
    },
    /// The local server refused the connection, could not be reached, or
    /// answered with a non-success status code.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    /// The model output does not contain a usable JSON object.
    #[error("Malformed output: {0}")]
    MalformedOutput(#[from] MalformedOutputError),
    /// The response from the backend was missing something it always has
    /// (e.g. no choices in a chat completion).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

#[derive(Error, Debug)]
pub enum MalformedOutputError {
    #[error("model did not return a JSON object")]
    NoJsonObject,
    #[error("model returned invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("model returned JSON with an unexpected shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}

pub type GenerationResult<T> = Result<T, GenerationError>;
