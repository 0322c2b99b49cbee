mod api;
mod model;

pub use model::{AnthropicBackend, AnthropicBackendOptions};
