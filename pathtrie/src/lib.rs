//! # pathtrie
//!
//! Convenience crate that re-exports the pathtrie policy engine together with
//! its TOML configuration backend.
//!
//! For the engine alone, depend on `pathtrie-engine` directly.
//!
//! # Quick Start
//!
//! ```rust
//! use pathtrie::{engine_from_toml, AccessDecision, PolicyEngine};
//!
//! // Load a policy from TOML
//! let orders = engine_from_toml(r#"
//!     allow = ["order.id", "order.total", "payload.header", "payload.content"]
//!     suppress = ["payload.content"]
//! "#).expect("Failed to parse policy");
//!
//! // Point lookups
//! assert_eq!(orders.check_access("order.id"), AccessDecision::Allowed);
//! assert_eq!(orders.check_access("payload.content"), AccessDecision::BlockedSuppressed);
//! assert_eq!(orders.check_access("order"), AccessDecision::DeniedNotFound);
//!
//! // Build a second policy in code and intersect
//! let mut inventory = PolicyEngine::new();
//! inventory.allow_path("order.id");
//! inventory.allow_path("sku");
//! assert_eq!(orders.intersection(&inventory), vec!["order.id".to_string()]);
//!
//! // Compile the effective allow set for O(1) lookups
//! let compiled = orders.compile();
//! assert!(compiled.contains("payload.header"));
//! assert!(!compiled.contains("payload.content"));
//! ```

// Re-export everything from the engine crate
pub use pathtrie_engine::*;

// Re-export the configuration backend
pub use pathtrie_policy::{engine_from_file, engine_from_toml, PolicyConfig, PolicyConfigError};
