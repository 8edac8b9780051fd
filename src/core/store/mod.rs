//! Secret store abstraction.
//!
//! The resolver only needs one operation from a secret store: look up an
//! identifier and hand back its string value, if any.
//!
//! ## Backends
//!
//! - **aws**: Feature-gated (`aws`). AWS Secrets Manager `GetSecretValue`.
//! - **file**: JSON document on disk, for local development and offline pipelines.
//! - **memory**: In-process map that records lookups. Used by tests and benches.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Wire it into `backend::from_config`

use crate::core::types::SecretId;
use crate::error::StoreError;

#[cfg(feature = "aws")]
pub mod aws;
mod backend;
mod file;
mod memory;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManager;
pub use backend::from_config;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Outcome of a single store lookup.
///
/// - `Ok(Some(raw))` - the secret exists and has a string value
/// - `Ok(None)` - the secret does not exist (or has no string value)
/// - `Err(_)` - the lookup itself failed (access denied, transport, ...)
pub type FetchResult = std::result::Result<Option<String>, StoreError>;

/// Secret store trait.
pub trait SecretStore {
    /// Fetch the raw string value stored under `id`.
    fn fetch(&self, id: &SecretId) -> FetchResult;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

impl<S: SecretStore + ?Sized> SecretStore for Box<S> {
    fn fetch(&self, id: &SecretId) -> FetchResult {
        (**self).fetch(id)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
