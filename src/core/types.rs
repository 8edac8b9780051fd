//! Domain types for secret resolution.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::constants::DEFAULT_STAGE;

/// An application name (e.g., `sst-ci-sandbox`).
pub type AppName = String;

/// Identifier of a secret in the secret store: `<app>/<stage>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SecretId(String);

impl SecretId {
    /// Stage-specific identifier, `<app>/<stage>`.
    pub fn for_stage(app: &str, stage: &str) -> Self {
        Self(format!("{}/{}", app, stage))
    }

    /// Fallback identifier, `<app>/default`.
    pub fn fallback(app: &str) -> Self {
        Self::for_stage(app, DEFAULT_STAGE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SecretId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SecretId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for SecretId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Decoded secret value: a flat map of string keys to string values.
pub type SecretPayload = BTreeMap<String, String>;

/// Which of the two lookups produced a [`ResolvedEnv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Stage,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stage => f.write_str("stage"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// A resolved runtime environment.
///
/// Only constructed by the resolver after a secret was found, parsed and
/// (when keys are required) validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnv {
    vars: BTreeMap<String, String>,
    source: SecretId,
    origin: Origin,
}

impl ResolvedEnv {
    pub(crate) fn new(vars: BTreeMap<String, String>, source: SecretId, origin: Origin) -> Self {
        Self {
            vars,
            source,
            origin,
        }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Key names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Secret identifier the values were read from.
    pub fn source(&self) -> &SecretId {
        &self.source
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Consume into the underlying map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.vars
    }
}
