use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.invalid_key")]
    InvalidKey(String),
    #[error("storage.quota_exceeded")]
    QuotaExceeded { size: usize, quota: usize },
    #[error("storage.io")]
    Io(#[from] std::io::Error),
}
