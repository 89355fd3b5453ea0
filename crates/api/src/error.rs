#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown document: {0}")]
    UnknownDocument(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Malformed resolve data: {0}")]
    MalformedResolveData(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedResolveData(err.to_string())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
