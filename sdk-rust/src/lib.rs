pub mod anthropic;
mod backend;
pub mod chat_completions;
mod client;
mod client_utils;
mod errors;
mod opentelemetry;
mod structured_output;
pub mod testing;

pub use backend::{Backend, BackendKind, BackendSelection, Credentials, GenerationRequest};
pub use client::GenerationClient;
pub use errors::*;
pub use structured_output::{decode_object, extract_json_object};
