use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Local storage is not available")]
    StorageUnavailable,
    #[error("Could not write to local storage: {0}")]
    StorageWrite(String),
    #[error("Could not encode data: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {0}")]
    Status(u16),
    #[error("Malformed analysis data: {0}")]
    Decode(String),
    #[error("Chart error: {0}")]
    Chart(String),
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => AppError::Decode(err.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("Amount must be a positive number no larger than 1,000,000,000,000, got `{0}`.")]
    InvalidAmount(String),
    #[error("Date must look like YYYY-MM-DD, got `{0}`.")]
    InvalidDate(String),
}
