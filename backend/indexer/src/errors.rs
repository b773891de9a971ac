//! Application-wide error types.
//!
//! Everything that can go wrong inside the indexer funnels into
//! [`IndexerError`]; `main` converts it to `anyhow` at the very top.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("RPC transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Event decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, IndexerError>;
