//! Backend selection for the secret store.

use tracing::info;

use super::{FileStore, SecretStore};
use crate::core::config::{Backend, Config};
use crate::error::{ConfigError, Result};

/// Build the secret store named by the `[store]` section.
///
/// The AWS backend is only available when compiled with the `aws` feature.
pub fn from_config(config: &Config) -> Result<Box<dyn SecretStore>> {
    match config.store.backend {
        Backend::File => {
            let path = config
                .store
                .path
                .clone()
                .ok_or(ConfigError::MissingField { field: "store.path" })?;
            info!(path = %path.display(), "using file secret store");
            Ok(Box::new(FileStore::new(path)))
        }
        Backend::Aws => aws_store(config),
    }
}

#[cfg(feature = "aws")]
fn aws_store(config: &Config) -> Result<Box<dyn SecretStore>> {
    info!(region = ?config.app.region, "using AWS Secrets Manager store");
    let store = super::AwsSecretsManager::new(config.app.region.as_deref())?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "aws"))]
fn aws_store(_config: &Config) -> Result<Box<dyn SecretStore>> {
    Err(ConfigError::BackendUnavailable("aws").into())
}
