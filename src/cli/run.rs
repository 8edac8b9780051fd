//! Run command.
//!
//! Executes a command with the resolved environment injected.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::resolve_stage;
use crate::core::config::Overrides;
use crate::core::types::ResolvedEnv;
use crate::error::{Error, Result};

/// Run a command with the stage's environment and exit with its status.
pub fn execute(overrides: Overrides, stage: &str, command: &[String]) -> Result<()> {
    let env = resolve_stage(overrides, stage)?;
    let exit_code = run_with_env(env, command)?;
    std::process::exit(exit_code);
}

/// Spawn `command` with `env` layered over the inherited environment.
fn run_with_env(env: ResolvedEnv, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    debug!(program = %program, keys = env.len(), source = %env.source(), "spawning");

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    for (key, value) in env.into_map() {
        let value = Zeroizing::new(value);
        cmd.env(key, value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
