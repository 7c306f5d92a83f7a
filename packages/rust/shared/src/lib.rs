//! Shared types, error model, and configuration for ConfigScout.
//!
//! This crate is the foundation depended on by all other ConfigScout crates.
//! It provides:
//! - [`ConfigScoutError`] — the unified error type
//! - Domain types ([`WorkspaceConfig`], [`Task`], [`Phase`], [`VsCodeConfig`])
//! - Application configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ProbeConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{ConfigScoutError, Result};
pub use types::{Phase, Task, VsCodeConfig, WorkspaceConfig};
