use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown table: {0}")]
    UnknownTable(String),
    #[error("unknown stage: {0}")]
    UnknownStage(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
