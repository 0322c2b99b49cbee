use crate::WizardStage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Generation error: {0}")]
    Generation(#[from] articleforge_sdk::GenerationError),
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Cannot {action} while the wizard is at {stage:?}")]
    InvalidTransition {
        stage: WizardStage,
        action: &'static str,
    },
    #[error("Missing input: {0}")]
    MissingInput(&'static str),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("the file does not contain a header line")]
    Empty,
    #[error("could not read the file: {0}")]
    Csv(#[from] csv::Error),
}

pub type WizardResult<T> = Result<T, WizardError>;
