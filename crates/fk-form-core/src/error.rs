use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid settings: {0}")]
    Settings(String),
    #[error("unsupported target: {0}")]
    Target(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error("expected element not found: {0}")]
    Missing(&'static str),
}

pub type Result<T> = std::result::Result<T, FormError>;
