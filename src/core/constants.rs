//! Constants used throughout stagehand.

/// Configuration file name (.stagehand.toml).
pub const CONFIG_FILE: &str = ".stagehand.toml";

/// Stage name of the fallback secret (`<app>/default`).
pub const DEFAULT_STAGE: &str = "default";

/// Environment variable that supplies the stage when `--stage` is omitted.
pub const STAGE_ENV: &str = "STAGEHAND_STAGE";

/// Environment variable that supplies the app name when `--app` is omitted.
pub const APP_ENV: &str = "STAGEHAND_APP";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "STAGEHAND_LOG";

/// File mode for environment files written by `resolve --output`.
#[cfg(unix)]
pub const ENV_FILE_MODE: u32 = 0o600;
