use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolError {
    #[error("Symbol must not be empty")]
    Empty,
    #[error("Invalid symbol '{0}': expected printable ASCII without whitespace")]
    Invalid(String),
}

/// Failures of the watchlist backing store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read watchlist at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write watchlist at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of a single quote request.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Connection failure, timeout, or an interrupted response body.
    #[error("Transport error: {0}")]
    Transport(String),
    /// Non-success status code or a payload we could not make sense of.
    #[error("Bad response: {0}")]
    BadResponse(String),
    /// The provider credential is missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() || err.is_status() {
            ProviderError::BadResponse(err.to_string())
        } else {
            ProviderError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}
