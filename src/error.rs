//! Error types for Cinegraph.

use thiserror::Error;

/// Errors surfaced by the store, config, and server layers.
#[derive(Debug, Error)]
pub enum CinegraphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("serialize error: {0}")]
    SerializeError(String),

    #[error("store error: {0}")]
    StoreError(String),
}

pub type Result<T> = std::result::Result<T, CinegraphError>;
