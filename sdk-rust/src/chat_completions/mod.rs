mod api;
mod local;
mod xai;

pub use local::{LocalBackend, LocalBackendOptions};
pub use xai::{XaiBackend, XaiBackendOptions};
