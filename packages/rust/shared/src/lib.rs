//! Shared types, error model, and configuration for relink.
//!
//! This crate is the foundation depended on by the rewriter and CLI crates.
//! It provides:
//! - [`RelinkError`] — the unified error type
//! - Domain types ([`RewritePolicy`], [`LabelPolicy`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from, validate_base_url,
};
pub use error::{RelinkError, Result};
pub use types::{LabelPolicy, RewritePolicy};
