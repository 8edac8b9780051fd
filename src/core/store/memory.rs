//! In-memory secret store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{FetchResult, SecretStore};
use crate::core::types::SecretId;
use crate::error::StoreError;

#[derive(Debug, Clone)]
enum Entry {
    Value(String),
    Failure(String),
}

/// Secret store backed by a `HashMap`.
///
/// Every lookup is appended to a fetch log so callers can assert which
/// identifiers were requested and in what order. Stores built with
/// [`MemoryStore::untracked`] keep no log.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<SecretId, Entry>,
    fetched: Mutex<Vec<SecretId>>,
    untracked: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that does not record lookups, for hot loops.
    pub fn untracked() -> Self {
        Self {
            untracked: true,
            ..Self::default()
        }
    }

    /// Store a raw secret string (need not be valid JSON).
    pub fn insert(&mut self, id: impl Into<SecretId>, raw: impl Into<String>) -> &mut Self {
        self.entries.insert(id.into(), Entry::Value(raw.into()));
        self
    }

    /// Store a secret as the JSON encoding of `pairs`.
    pub fn insert_json(&mut self, id: impl Into<SecretId>, pairs: &[(&str, &str)]) -> &mut Self {
        let map: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        self.insert(id, serde_json::Value::Object(map).to_string())
    }

    /// Make lookups of `id` fail with a store error.
    pub fn fail(&mut self, id: impl Into<SecretId>, reason: impl Into<String>) -> &mut Self {
        self.entries.insert(id.into(), Entry::Failure(reason.into()));
        self
    }

    /// Identifiers fetched so far, oldest first.
    pub fn fetched(&self) -> Vec<SecretId> {
        self.fetched
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Drop the recorded lookups.
    pub fn clear_fetched(&self) {
        if let Ok(mut log) = self.fetched.lock() {
            log.clear();
        }
    }
}

impl SecretStore for MemoryStore {
    fn fetch(&self, id: &SecretId) -> FetchResult {
        if !self.untracked {
            if let Ok(mut log) = self.fetched.lock() {
                log.push(id.clone());
            }
        }

        match self.entries.get(id) {
            Some(Entry::Value(raw)) => Ok(Some(raw.clone())),
            Some(Entry::Failure(reason)) => Err(StoreError::Fetch {
                id: id.clone(),
                reason: reason.clone(),
            }),
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
