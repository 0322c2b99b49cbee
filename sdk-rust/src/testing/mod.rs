mod backend;

pub use backend::{MockBackend, MockSendInput, MockSendResult};
