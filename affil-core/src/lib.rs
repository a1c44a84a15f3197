pub mod adapter;
pub mod generation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Remote fetch failed: {0}")]
    RemoteFetch(String),
    #[error("Generation failed: {0}")]
    Generation(String),
    #[error("Notification failed: {0}")]
    Notify(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Internal service error: {0}")]
    Internal(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
