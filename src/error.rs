// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReindexError>;

#[derive(Error, Debug)]
pub enum ReindexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection to {endpoint} failed: {message}")]
    Connection { endpoint: String, message: String },

    #[error("Schema alteration failed for {predicate}: {message}")]
    Schema { predicate: String, message: String },

    #[error("Embeddings manifest error in {path}: {message}")]
    Manifest { path: PathBuf, message: String },
}
