//! Flat, hash-set form of a policy for constant-time membership checks.

use std::collections::HashSet;

/// The set of effectively allowed paths of a [`PolicyEngine`](crate::PolicyEngine).
///
/// Built by `PolicyEngine::compile`, which applies the same suppression
/// pruning as `flatten`. This is a snapshot: later changes to the engine are
/// not reflected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledPolicy {
    allowed: HashSet<String>,
}

impl CompiledPolicy {
    /// Check whether a path is in the compiled allow set.
    pub fn contains(&self, path: &str) -> bool {
        self.allowed.contains(path)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }

    /// Consume the set and return its paths in lexicographic order.
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut paths: Vec<String> = self.allowed.into_iter().collect();
        paths.sort();
        paths
    }
}

impl FromIterator<String> for CompiledPolicy {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            allowed: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let compiled: CompiledPolicy = ["user.name", "order.id"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(compiled.contains("user.name"));
        assert!(!compiled.contains("user"));
        assert_eq!(compiled.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let compiled: CompiledPolicy = ["a", "a", "b"].into_iter().map(String::from).collect();
        assert_eq!(compiled.into_sorted_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty() {
        let compiled = CompiledPolicy::default();
        assert!(compiled.is_empty());
        assert_eq!(compiled.iter().count(), 0);
    }
}
