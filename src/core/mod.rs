//! Core library components.
//!
//! Secret resolution, secret store backends, configuration handling and
//! output rendering. Nothing in here prints to the terminal.

pub mod config;
pub mod constants;
pub mod render;
pub mod resolver;
pub mod store;
pub mod types;
pub mod validation;

pub use resolver::resolve_env;
pub use store::SecretStore;
pub use types::{Origin, ResolvedEnv, SecretId, SecretPayload};
