//! Stagehand - stage-aware secret resolution for serverless deployments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stagehand::cli::output;
use stagehand::cli::{execute, Cli};
use stagehand::core::constants::LOG_ENV;
use stagehand::error::{ConfigError, Error, ResolveError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stagehand=debug")
        } else {
            EnvFilter::new("stagehand=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::NotInitialized) => {
                Some("run: stagehand init --app <name>")
            }
            Error::Config(ConfigError::AlreadyInitialized) => Some("run: stagehand init --force"),
            Error::Config(ConfigError::BackendUnavailable(_)) => {
                Some("rebuild with --features aws, or pass --store-file <path>")
            }
            Error::Resolve(ResolveError::MissingSecret { .. }) => {
                Some("rerun with --verbose to see why each lookup failed")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
