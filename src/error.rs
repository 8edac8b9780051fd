//! Error types.
//!
//! A top-level [`Error`] wraps one enum per concern so callers can match on
//! the failure they care about (e.g. `Error::Resolve(ResolveError::MissingKey { .. })`).

use thiserror::Error;

use crate::core::types::SecretId;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Terminal resolution failures.
///
/// Both abort the calling deployment run.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("missing secrets: {stage_id} or {default_id}")]
    MissingSecret {
        stage_id: SecretId,
        default_id: SecretId,
    },

    #[error("missing key {key} in secret {source_id}")]
    MissingKey { key: String, source_id: SecretId },
}

/// Secret store failures.
///
/// Recovered inside the resolver (they trigger the fallback); surfaced only
/// when a store cannot be constructed at all.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("fetch of {id} failed: {reason}")]
    Fetch { id: SecretId, reason: String },

    #[error("failed to read secret file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid secret file {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("failed to initialise store: {0}")]
    Init(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `stagehand init` or pass --app")]
    NotInitialized,

    #[error("already initialized: .stagehand.toml exists (use --force to overwrite)")]
    AlreadyInitialized,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing config field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid config field {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("store backend '{0}' is not available in this build (enable the `{0}` feature)")]
    BackendUnavailable(&'static str),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("duplicate required key: {0}")]
    DuplicateKey(String),

    #[error("invalid app name '{name}': {reason}")]
    InvalidAppName { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
