//! # pathtrie engine
//!
//! Prefix-tree access policy engine for dotted-path identifiers such as
//! `service.module.action`.
//!
//! This crate provides:
//! - `PolicyEngine`, which stores allowed and suppressed paths in a trie
//! - Point lookups via `check_access`, returning an `AccessDecision`
//! - Tree-wide `intersection` of two engines and suppression-pruned `flatten`
//! - `CompiledPolicy`, a hash-set snapshot of `flatten` for O(1) lookups

pub mod compiled;
pub mod engine;
pub mod node;
pub mod path;
pub mod types;

pub use compiled::CompiledPolicy;
pub use engine::PolicyEngine;
pub use node::TrieNode;
pub use path::{join_path, split_path, PATH_DELIMITER};
pub use types::AccessDecision;
