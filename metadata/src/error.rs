use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("not a {expected} data URI")]
    InvalidUri { expected: &'static str },
}
