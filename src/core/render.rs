//! Output formats for a resolved environment.

use std::path::Path;

use crate::core::types::ResolvedEnv;
use crate::error::{Error, Result};

/// How `resolve` prints the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `KEY=value` lines, quoted where needed
    #[default]
    Dotenv,
    /// A single JSON object
    Json,
    /// `export KEY='value'` lines for `eval`
    Shell,
}

/// Render `env` in the given format. Output always ends with a newline.
pub fn render(env: &ResolvedEnv, format: Format) -> Result<String> {
    match format {
        Format::Dotenv => Ok(to_dotenv(env)),
        Format::Json => {
            let mut out = serde_json::to_string_pretty(env.as_map())
                .map_err(|e| Error::Other(format!("failed to serialize environment: {}", e)))?;
            out.push('\n');
            Ok(out)
        }
        Format::Shell => Ok(to_shell(env)),
    }
}

/// Write rendered output to `path` with owner-only permissions.
pub fn write_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        use crate::core::constants::ENV_FILE_MODE;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(ENV_FILE_MODE)
            .open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        // An existing file keeps its old mode on open; reset it.
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(ENV_FILE_MODE))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, contents)?;
    }

    Ok(())
}

fn to_dotenv(env: &ResolvedEnv) -> String {
    let mut output = String::new();
    for (key, value) in env.iter() {
        if needs_quotes(value) {
            output.push_str(&format!("{}=\"{}\"\n", key, escape_dotenv(value)));
        } else {
            output.push_str(&format!("{}={}\n", key, value));
        }
    }
    output
}

fn to_shell(env: &ResolvedEnv) -> String {
    let mut output = String::new();
    for (key, value) in env.iter() {
        output.push_str(&format!("export {}='{}'\n", key, value.replace('\'', r"'\''")));
    }
    output
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
}

fn escape_dotenv(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
