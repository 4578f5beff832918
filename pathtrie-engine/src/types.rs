//! Core types for the policy engine.

use serde::{Deserialize, Serialize};

/// Result of evaluating a single path with `PolicyEngine::check_access`.
///
/// "Not found" and "blocked" are ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessDecision {
    /// The path was explicitly allowed and is not suppressed.
    Allowed,
    /// The path is suppressed, whether or not it was also allowed.
    BlockedSuppressed,
    /// The path (or one of its prefixes) was never registered, or it exists
    /// only as an intermediate segment.
    DeniedNotFound,
}

impl AccessDecision {
    /// True only for `Allowed`.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    /// The canonical upper-case name, as used by `Display` and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessDecision::Allowed => "ALLOWED",
            AccessDecision::BlockedSuppressed => "BLOCKED_SUPPRESSED",
            AccessDecision::DeniedNotFound => "DENIED_NOT_FOUND",
        }
    }
}

impl std::fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
