//! # pathtrie policy
//!
//! TOML configuration backend for the pathtrie engine.
//!
//! A policy file lists the dotted paths to allow and the ones to suppress.
//! The helpers here parse, validate, and build a ready-to-query
//! [`PolicyEngine`].

mod config;

use std::path::Path;

use pathtrie_engine::PolicyEngine;

pub use config::{PolicyConfig, PolicyConfigError};

/// Parse and validate a TOML policy, then build an engine from it.
pub fn engine_from_toml(content: &str) -> Result<PolicyEngine, PolicyConfigError> {
    let config = PolicyConfig::parse(content)?;
    config.validate()?;
    Ok(PolicyEngine::from(config))
}

/// Load and validate a TOML policy file, then build an engine from it.
pub fn engine_from_file(path: &Path) -> Result<PolicyEngine, PolicyConfigError> {
    let config = PolicyConfig::from_file(path)?;
    config.validate()?;
    Ok(PolicyEngine::from(config))
}
