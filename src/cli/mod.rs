//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod resolve;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{Config, Overrides};
use crate::core::constants;
use crate::core::render::Format;
use crate::core::store::{self, SecretStore};
use crate::core::types::ResolvedEnv;
use crate::error::Result;

/// Stagehand - stage-aware secret resolution for serverless deployments.
#[derive(Parser)]
#[command(
    name = "stagehand",
    about = "Resolve a deployment stage's environment from a secret store",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Application name (overrides .stagehand.toml)
    #[arg(long, global = true, env = constants::APP_ENV)]
    pub app: Option<String>,

    /// AWS region for Secrets Manager (overrides .stagehand.toml)
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Required key; repeat for several (added to .stagehand.toml's list)
    #[arg(long = "require", value_name = "KEY", global = true)]
    pub require: Vec<String>,

    /// Read secrets from a JSON file instead of the configured store
    #[arg(long, value_name = "PATH", global = true)]
    pub store_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Command-line values that take precedence over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            app: self.app.clone(),
            region: self.region.clone(),
            required: self.require.clone(),
            store_file: self.store_file.clone(),
        }
    }
}

/// Deployment stage selection shared by resolving commands.
#[derive(Args, Debug, Clone)]
pub struct StageArgs {
    /// Deployment stage (e.g., production, dev)
    #[arg(short, long, env = constants::STAGE_ENV)]
    pub stage: String,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write .stagehand.toml from --app, --region, --require and --store-file
    Init {
        /// Overwrite an existing .stagehand.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Print the resolved environment for a stage
    Resolve {
        #[command(flatten)]
        stage: StageArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Dotenv)]
        format: Format,
        /// Write to a file (mode 0600) instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show which secret a stage resolves to and its key names
    Check {
        #[command(flatten)]
        stage: StageArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a command with the resolved environment injected
    Run {
        #[command(flatten)]
        stage: StageArgs,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let overrides = cli.overrides();

    match cli.command {
        Command::Init { force } => init::execute(overrides, force),
        Command::Resolve {
            stage,
            format,
            output,
        } => resolve::execute(overrides, &stage.stage, format, output.as_deref()),
        Command::Check { stage, json } => check::execute(overrides, &stage.stage, json),
        Command::Run { stage, command } => run::execute(overrides, &stage.stage, &command),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Load config, open its store and resolve `stage`.
pub(crate) fn resolve_stage(overrides: Overrides, stage: &str) -> Result<ResolvedEnv> {
    let config = Config::load_with(overrides)?;
    let store = store::from_config(&config)?;
    resolve_with(&config, store.as_ref(), stage)
}

pub(crate) fn resolve_with(
    config: &Config,
    store: &dyn SecretStore,
    stage: &str,
) -> Result<ResolvedEnv> {
    crate::core::resolve_env(store, &config.app.name, stage, &config.env.required)
}
