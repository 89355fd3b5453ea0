use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnolintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Rule '{rule}' failed: {message}")]
    Rule { rule: String, message: String },
    #[error("Cannot build mutation: {0}")]
    Mutation(String),
    #[error("Edit conversion failed: {0}")]
    Edit(String),
    #[error(transparent)]
    Api(#[from] annolint_api::ApiError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AnnolintError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AnnolintError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnnolintError>;

/// Renders a `catch_unwind` payload for logging.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
