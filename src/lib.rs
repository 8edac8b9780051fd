//! Stagehand - stage-aware secret resolution for serverless deployments.
//!
//! Resolves an application's runtime environment from a secret store:
//! `<app>/<stage>` first, `<app>/default` when the stage has no secret of its
//! own, then checks that every required key is present and non-empty.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write .stagehand.toml
//! │   ├── resolve       # Print or write the resolved environment
//! │   ├── check         # Report where the environment came from
//! │   ├── run           # Run a command with the environment injected
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .stagehand.toml management
//!     ├── resolver      # Stage -> default fallback and key validation
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # SecretStore trait
//!     │   ├── aws       # AWS Secrets Manager (feature `aws`)
//!     │   ├── file      # JSON file
//!     │   └── memory    # In-memory, records lookups
//!     ├── render        # dotenv / json / shell output
//!     └── validation    # Key and app name checks
//! ```
//!
//! # Example
//!
//! ```
//! use stagehand::core::{resolve_env, store::MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! store.insert_json("app1/default", &[("MY_ENV_VAR1", "x"), ("MY_ENV_VAR2", "y")]);
//!
//! let required = vec!["MY_ENV_VAR1".to_string(), "MY_ENV_VAR2".to_string()];
//! let env = resolve_env(&store, "app1", "dev", &required).unwrap();
//! assert_eq!(env.get("MY_ENV_VAR1"), Some("x"));
//! assert_eq!(env.source().as_str(), "app1/default");
//! ```

pub mod cli;
pub mod core;
pub mod error;
