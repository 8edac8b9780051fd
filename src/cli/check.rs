//! Check command.
//!
//! Resolves a stage and reports where the environment came from, listing
//! key names only. Values are never printed.

use serde::Serialize;

use crate::cli::{output, resolve_with};
use crate::core::config::{Config, Overrides};
use crate::core::store;
use crate::core::types::{Origin, SecretId};
use crate::error::{Error, Result};

#[derive(Serialize)]
struct Report<'a> {
    app: &'a str,
    stage: &'a str,
    store: &'static str,
    source: &'a SecretId,
    origin: Origin,
    keys: Vec<&'a str>,
}

/// Resolve `stage` and print a summary.
pub fn execute(overrides: Overrides, stage: &str, json: bool) -> Result<()> {
    let config = Config::load_with(overrides)?;
    let store = store::from_config(&config)?;
    let env = resolve_with(&config, store.as_ref(), stage)?;

    if json {
        let report = Report {
            app: &config.app.name,
            stage,
            store: store.name(),
            source: env.source(),
            origin: env.origin(),
            keys: env.keys().collect(),
        };
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::Other(format!("failed to serialize report: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    output::section("Stagehand Check");
    output::kv("app", &config.app.name);
    output::kv("stage", stage);
    output::kv("store", store.name());
    output::kv("source", format!("{} ({})", env.source(), env.origin()));

    if config.env.required.is_empty() {
        output::warn("no required keys configured, the whole secret is used");
    }

    output::section(&format!("Keys ({})", env.len()));
    for key in env.keys() {
        output::list_item(key);
    }

    println!();
    output::success("environment resolves");
    Ok(())
}
