//! Error types for rentreport-store

use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid document at {location}: {message}")]
    InvalidDocument {
        location: String,
        message: String,
    },

    #[error("Store backend error: {message}")]
    Backend { message: String },

    #[error("IO error")]
    IoError(#[from] io::Error),
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
