//! TOML configuration for building policy engines.

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use pathtrie_engine::{split_path, PolicyEngine};

/// Errors from policy configuration parsing and validation.
#[derive(Error, Debug)]
pub enum PolicyConfigError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse policy TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid policy path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },
}

/// Top-level policy configuration.
///
/// ```toml
/// allow = ["user.profile.view", "order.id"]
/// suppress = ["payload.content"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Dotted paths to mark as allowed.
    #[serde(default)]
    pub allow: Vec<String>,

    /// Dotted paths to mark as suppressed. Suppression overrides allowance at
    /// the same path and hides every allowed path beneath it from `flatten`.
    #[serde(default)]
    pub suppress: Vec<String>,
}

impl PolicyConfig {
    /// Load policy from a TOML file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, PolicyConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        info!(
            path = %path.display(),
            allowed = config.allow.len(),
            suppressed = config.suppress.len(),
            "loaded policy"
        );
        Ok(config)
    }

    /// Parse policy from a TOML string.
    pub fn parse(content: &str) -> Result<Self, PolicyConfigError> {
        let config: PolicyConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Reject empty paths and paths with empty segments.
    ///
    /// The engine itself accepts these as empty-string keys; a configuration
    /// file containing them is almost always a typo.
    pub fn validate(&self) -> Result<(), PolicyConfigError> {
        for path in self.allow.iter().chain(&self.suppress) {
            validate_path(path)?;
        }
        Ok(())
    }
}

fn validate_path(path: &str) -> Result<(), PolicyConfigError> {
    if path.is_empty() {
        return Err(PolicyConfigError::InvalidPath {
            path: path.to_string(),
            reason: "path is empty".to_string(),
        });
    }
    if split_path(path).any(str::is_empty) {
        return Err(PolicyConfigError::InvalidPath {
            path: path.to_string(),
            reason: "path contains an empty segment".to_string(),
        });
    }
    Ok(())
}

impl From<PolicyConfig> for PolicyEngine {
    /// Build an engine by applying every `allow` entry, then every `suppress`
    /// entry. Registration order does not affect the result.
    fn from(config: PolicyConfig) -> Self {
        let mut engine = PolicyEngine::new();
        for path in &config.allow {
            engine.allow_path(path);
        }
        for path in &config.suppress {
            engine.suppress_path(path);
        }
        engine
    }
}
