//! JSON file secret store.
//!
//! Reads a document mapping secret identifiers to secret values:
//!
//! ```json
//! {
//!   "sst-ci-sandbox/production": { "MY_ENV_VAR1": "a", "MY_ENV_VAR2": "b" },
//!   "sst-ci-sandbox/default": "{\"MY_ENV_VAR1\":\"x\",\"MY_ENV_VAR2\":\"y\"}"
//! }
//! ```
//!
//! A string value is returned verbatim as the secret string (exactly what
//! Secrets Manager would hand back, malformed or not). Any other JSON value is
//! re-encoded to a string. The file is re-read on every fetch.

use std::path::PathBuf;

use serde_json::Value;
use tracing::trace;

use super::{FetchResult, SecretStore};
use crate::core::types::SecretId;
use crate::error::StoreError;

/// Secret store backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> std::result::Result<serde_json::Map<String, Value>, StoreError> {
        let display = self.path.display().to_string();
        let contents = std::fs::read_to_string(&self.path).map_err(|source| StoreError::ReadFile {
            path: display.clone(),
            source,
        })?;

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::InvalidFile {
                path: display,
                reason: "top-level value must be an object".to_string(),
            }),
            Err(e) => Err(StoreError::InvalidFile {
                path: display,
                reason: e.to_string(),
            }),
        }
    }
}

impl SecretStore for FileStore {
    fn fetch(&self, id: &SecretId) -> FetchResult {
        trace!(path = %self.path.display(), id = %id, "reading secret file");

        let mut secrets = self.load()?;
        let raw = match secrets.remove(id.as_str()) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        Ok(raw)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
