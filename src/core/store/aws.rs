//! AWS Secrets Manager backend.
//!
//! Enable with `--features aws`.
//!
//! ## Usage
//!
//! Configure your project with:
//! ```toml
//! [app]
//! name = "sst-ci-sandbox"
//! region = "ap-northeast-1"
//!
//! [store]
//! backend = "aws"
//! ```
//!
//! Credentials come from the environment (AWS_ACCESS_KEY_ID, etc.) or the
//! default credential provider chain. Without a configured region the
//! provider chain's region is used.

use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use tracing::trace;

use super::{FetchResult, SecretStore};
use crate::core::types::SecretId;
use crate::error::StoreError;

/// AWS Secrets Manager store.
///
/// The SDK is async; the store owns a current-thread runtime and blocks on
/// each call so the resolver stays synchronous.
pub struct AwsSecretsManager {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretsManager {
    /// Create a client for `region` (or the provider chain's region).
    pub fn new(region: Option<&str>) -> std::result::Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Init(format!("failed to create runtime: {}", e)))?;

        let client = runtime.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(region) = region {
                loader = loader.region(Region::new(region.to_string()));
            }
            let config = loader.load().await;
            aws_sdk_secretsmanager::Client::new(&config)
        });

        Ok(Self { runtime, client })
    }
}

impl SecretStore for AwsSecretsManager {
    fn fetch(&self, id: &SecretId) -> FetchResult {
        trace!(id = %id, "GetSecretValue");

        self.runtime.block_on(async {
            let result = self
                .client
                .get_secret_value()
                .secret_id(id.as_str())
                .send()
                .await;

            match result {
                // Binary-only secrets have no SecretString and count as absent.
                Ok(output) => Ok(output.secret_string().map(str::to_string)),
                Err(err) => {
                    if err
                        .as_service_error()
                        .is_some_and(|e| e.is_resource_not_found_exception())
                    {
                        trace!(id = %id, "secret does not exist");
                        return Ok(None);
                    }
                    Err(StoreError::Fetch {
                        id: id.clone(),
                        reason: DisplayErrorContext(&err).to_string(),
                    })
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "aws"
    }
}
