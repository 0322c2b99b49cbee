mod dataset;
mod document;
mod errors;
pub mod prompts;
mod state;
mod types;
mod wizard;

pub use dataset::{Dataset, Record};
pub use document::{ArticleDocument, DOCUMENT_CONTENT_TYPE, DOCUMENT_FILE_NAME};
pub use errors::{DatasetError, WizardError, WizardResult};
pub use state::{WizardStage, WizardState};
pub use types::*;
pub use wizard::Wizard;
