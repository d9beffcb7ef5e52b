use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    /// Stored data is readable but contradicts itself.
    #[error("database is corrupted: {0}")]
    Corruption(String),
}
