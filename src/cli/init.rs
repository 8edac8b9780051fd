//! Init command.
//!
//! Writes `.stagehand.toml` from the global flags.

use tracing::info;

use crate::cli::output;
use crate::core::config::{Config, Overrides};
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Initialize stagehand in the current directory.
pub fn execute(overrides: Overrides, force: bool) -> Result<()> {
    if Config::exists() && !force {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let app = overrides
        .app
        .clone()
        .ok_or(ConfigError::MissingField { field: "app.name" })?;

    let mut config = Config::new(app);
    config.apply(overrides);
    config.validate()?;
    config.save()?;

    info!(app = %config.app.name, "wrote config");

    output::success(&format!("initialized {}", output::path(constants::CONFIG_FILE)));
    output::kv("app", &config.app.name);
    if let Some(region) = &config.app.region {
        output::kv("region", region);
    }
    output::kv("store", config.store.backend.name());
    if !config.env.required.is_empty() {
        output::kv("required", config.env.required.join(", "));
    }
    output::hint(&format!(
        "secrets are read from {}/<stage>, then {}/{}",
        config.app.name,
        config.app.name,
        constants::DEFAULT_STAGE
    ));

    Ok(())
}
