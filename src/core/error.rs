use thiserror::Error;

use crate::db::StoreError;
use crate::directory::deletion::DeletionError;
use crate::models::ValidationError;
use crate::storage::RemovalError;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum BizdirError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    #[error("File removal error: {0}")]
    Removal(#[from] RemovalError),

    #[error("Deletion workflow error: {0}")]
    Deletion(#[from] DeletionError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, BizdirError>;
