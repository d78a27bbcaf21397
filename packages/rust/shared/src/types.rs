//! Domain types shared by the rewriter core and the CLI.

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::RelinkError;

// ---------------------------------------------------------------------------
// LabelPolicy
// ---------------------------------------------------------------------------

/// Which characters a link label may contain for a `[label](target)`
/// candidate to be recognized as a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Any characters up to the `](` separator.
    #[default]
    Any,
    /// Letters, digits, spaces, and hyphens only.
    Strict,
}

impl std::fmt::Display for LabelPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for LabelPolicy {
    type Err = RelinkError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "strict" => Ok(Self::Strict),
            other => Err(RelinkError::validation(format!(
                "unknown label policy '{other}': expected 'any' or 'strict'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// RewritePolicy
// ---------------------------------------------------------------------------

/// Runtime rewrite configuration — merged from config file + CLI flags,
/// fixed for the duration of one rewrite pass.
#[derive(Debug, Clone)]
pub struct RewritePolicy {
    /// Absolute URL prefix prepended to relative link targets.
    ///
    /// Prepending is a plain string join: no slash de-duplication is
    /// performed, so a base ending in `/` plus a target starting with `/`
    /// yields `//` in the output.
    pub base_url: String,
    /// Label character-class policy.
    pub label_policy: LabelPolicy,
    /// Document-source suffix stripped from relative targets before
    /// rebasing (the target site serves documents without it).
    pub strip_suffix: String,
}

impl From<&AppConfig> for RewritePolicy {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.defaults.base_url.clone(),
            label_policy: config.defaults.label_policy,
            strip_suffix: config.defaults.strip_suffix.clone(),
        }
    }
}
