use crate::{GenerationError, GenerationResult};
use std::{fmt, str::FromStr};

/// A text-generation service that can answer a single-turn prompt.
///
/// Every implementation hides its own authentication scheme, payload shape
/// and response envelope behind the same call, so callers never branch on
/// the backend kind after the initial selection.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    fn provider(&self) -> &'static str;
    fn model_id(&self) -> String;
    /// Send `prompt` as one user turn and return the raw text the model
    /// produced.
    async fn send(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        credentials: Option<&Credentials>,
    ) -> GenerationResult<String>;
}

/// The backends a session can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Anthropic Messages API, authenticated with an `x-api-key` header.
    Anthropic,
    /// xAI chat completions, authenticated with a bearer token.
    Xai,
    /// A local OpenAI-compatible server (LM Studio) without authentication.
    Local,
}

impl BackendKind {
    #[must_use]
    pub fn requires_credentials(self) -> bool {
        match self {
            Self::Anthropic | Self::Xai => true,
            Self::Local => false,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::Xai => "xai",
            Self::Local => "lmstudio",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "xai" | "grok" => Ok(Self::Xai),
            "lmstudio" | "local" => Ok(Self::Local),
            other => Err(GenerationError::InvalidInput(format!(
                "Unknown backend '{other}', expected one of: anthropic, xai, lmstudio"
            ))),
        }
    }
}

/// An API secret. Kept in memory only; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials(String);

impl Credentials {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credentials(***)")
    }
}

/// The backend chosen for a session together with the credentials it needs.
#[derive(Debug, Clone)]
pub struct BackendSelection {
    kind: BackendKind,
    credentials: Option<Credentials>,
}

impl BackendSelection {
    /// Validate a backend choice.
    ///
    /// Credentials are required (and must not be blank) for the cloud
    /// backends. They are dropped for the local backend.
    pub fn new(kind: BackendKind, credentials: Option<Credentials>) -> GenerationResult<Self> {
        if !kind.requires_credentials() {
            return Ok(Self {
                kind,
                credentials: None,
            });
        }

        match credentials {
            Some(credentials) if !credentials.is_blank() => Ok(Self {
                kind,
                credentials: Some(credentials),
            }),
            _ => Err(GenerationError::InvalidInput(format!(
                "An API key is required for the {kind} backend"
            ))),
        }
    }

    #[must_use]
    pub fn local() -> Self {
        Self {
            kind: BackendKind::Local,
            credentials: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

/// One prompt ready to be sent.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_output_tokens: u32,
    pub backend: BackendKind,
    pub credentials: Option<Credentials>,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        max_output_tokens: u32,
        selection: &BackendSelection,
    ) -> GenerationResult<Self> {
        if max_output_tokens == 0 {
            return Err(GenerationError::InvalidInput(
                "max_output_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            prompt: prompt.into(),
            max_output_tokens,
            backend: selection.kind,
            credentials: selection.credentials.clone(),
        })
    }
}
