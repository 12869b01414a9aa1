use thiserror::Error;

/// Application-level errors (command line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RuleError(#[from] rrtext_rfc::error::RuleError),

    #[error(transparent)]
    TextError(#[from] rrtext_rfc::error::TextError),

    #[error(transparent)]
    CoreError(#[from] rrtext_core::error::CoreError),

    #[error("Failed to encode description: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
