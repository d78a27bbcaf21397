//! Application configuration for relink.
//!
//! User config lives at `~/.relink/relink.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RelinkError, Result};
use crate::types::LabelPolicy;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "relink.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".relink";

// ---------------------------------------------------------------------------
// Config structs (matching relink.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Base URL prepended to relative link targets. Empty means
    /// unconfigured; the CLI rejects a rewrite without a base URL.
    #[serde(default)]
    pub base_url: String,

    /// Label character-class policy: "any" or "strict".
    #[serde(default)]
    pub label_policy: LabelPolicy,

    /// Suffix stripped from relative targets before rebasing.
    #[serde(default = "default_strip_suffix")]
    pub strip_suffix: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            label_policy: LabelPolicy::default(),
            strip_suffix: default_strip_suffix(),
        }
    }
}

fn default_strip_suffix() -> String {
    ".md".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.relink/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RelinkError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.relink/relink.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RelinkError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| RelinkError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| RelinkError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RelinkError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RelinkError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Check that a base URL is present and parses as an absolute URL.
///
/// The rewriter core assumes a non-empty base; this is the boundary check
/// the CLI runs before invoking it. The URL is validated but never
/// normalized — whatever string the user configured is joined verbatim.
pub fn validate_base_url(base: &str) -> Result<()> {
    if base.is_empty() {
        return Err(RelinkError::config(
            "no base URL configured. Pass --base-url or set defaults.base_url in relink.toml.",
        ));
    }

    Url::parse(base)
        .map_err(|e| RelinkError::config(format!("invalid base URL '{base}': {e}")))?;

    Ok(())
}
