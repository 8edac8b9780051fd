//! Resolve command.
//!
//! Prints the resolved environment, or writes it to a file.

use std::path::Path;

use crate::cli::{output, resolve_stage};
use crate::core::config::Overrides;
use crate::core::render::{self, Format};
use crate::error::Result;

/// Resolve `stage` and emit it in `format`.
pub fn execute(
    overrides: Overrides,
    stage: &str,
    format: Format,
    out: Option<&Path>,
) -> Result<()> {
    let env = resolve_stage(overrides, stage)?;
    let rendered = render::render(&env, format)?;

    match out {
        Some(path) => {
            render::write_file(path, &rendered)?;
            output::success(&format!(
                "wrote {} keys from {} to {}",
                env.len(),
                output::key(env.source().as_str()),
                output::path(&path.display().to_string())
            ));
        }
        None => {
            print!("{}", rendered);
            output::success_err(&format!(
                "resolved {} keys from {}",
                env.len(),
                output::key(env.source().as_str())
            ));
        }
    }

    Ok(())
}
