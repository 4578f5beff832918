//! The policy engine: path registration, point lookups, and whole-tree walks.

use tracing::{debug, trace};

use crate::compiled::CompiledPolicy;
use crate::node::TrieNode;
use crate::path::{join_path, split_path};
use crate::types::AccessDecision;

/// A hierarchical access policy over dotted paths.
///
/// Paths are registered with [`allow_path`](Self::allow_path) and
/// [`suppress_path`](Self::suppress_path), then queried with
/// [`check_access`](Self::check_access), [`intersection`](Self::intersection)
/// and [`flatten`](Self::flatten).
///
/// Suppression is read differently by each query. `check_access` only looks at
/// the terminal node, so a suppressed ancestor does not block an allowed
/// descendant. `flatten` prunes the whole subtree under a suppressed node.
/// `intersection` ignores suppression entirely.
///
/// All queries take `&self`; mutation takes `&mut self`. A fully built engine
/// can be shared between threads for reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEngine {
    root: TrieNode,
}

impl PolicyEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Mark `path` as allowed, creating any missing segments along the way.
    ///
    /// Idempotent. Allowing a suppressed path records the allowance but
    /// `check_access` keeps reporting it as suppressed.
    pub fn allow_path(&mut self, path: &str) {
        trace!(path, "allow path");
        self.node_or_insert(path).allow();
    }

    /// Mark `path` as suppressed, creating any missing segments along the way.
    ///
    /// Idempotent. Suppression never removes an existing allowance.
    pub fn suppress_path(&mut self, path: &str) {
        trace!(path, "suppress path");
        self.node_or_insert(path).suppress();
    }

    fn node_or_insert(&mut self, path: &str) -> &mut TrieNode {
        split_path(path).fold(&mut self.root, |node, segment| {
            node.child_or_insert(segment)
        })
    }

    // =========================================================================
    // Point lookup
    // =========================================================================

    /// Evaluate a single path.
    ///
    /// Suppression takes priority over allowance at the terminal node. A
    /// missing segment, or a node carrying neither flag, is `DeniedNotFound`.
    pub fn check_access(&self, path: &str) -> AccessDecision {
        let Some(node) = self.find(path) else {
            return AccessDecision::DeniedNotFound;
        };

        if node.is_suppressed() {
            AccessDecision::BlockedSuppressed
        } else if node.is_allowed() {
            AccessDecision::Allowed
        } else {
            AccessDecision::DeniedNotFound
        }
    }

    /// Find the node for `path` without creating anything.
    pub fn find(&self, path: &str) -> Option<&TrieNode> {
        split_path(path).try_fold(&self.root, |node, segment| node.child(segment))
    }

    // =========================================================================
    // Tree-wide algorithms
    // =========================================================================

    /// Paths allowed by both `self` and `other`.
    ///
    /// Walks both trees in lockstep, only descending into segments present on
    /// both sides. Suppression flags are not consulted. Each path appears once;
    /// the order is unspecified.
    pub fn intersection(&self, other: &PolicyEngine) -> Vec<String> {
        let mut results = Vec::new();
        intersect_nodes(&self.root, &other.root, &mut results);
        debug!(paths = results.len(), "computed policy intersection");
        results
    }

    /// Paths that are allowed and visible once suppression pruning applies.
    ///
    /// A suppressed node is never reported and none of its descendants are
    /// visited, even descendants that were allowed on their own. The order is
    /// unspecified.
    pub fn flatten(&self) -> Vec<String> {
        let mut results = Vec::new();
        flatten_children(&self.root, &mut results);
        debug!(paths = results.len(), "flattened policy");
        results
    }

    /// Snapshot `flatten()` into a hash set for constant-time lookups.
    pub fn compile(&self) -> CompiledPolicy {
        self.flatten().into_iter().collect()
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// The root node. It stands for the empty path and is never allowed or
    /// suppressed.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes in the trie, excluding the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }
}

/// Work-list entry: a segment, the node(s) it leads to, and its depth.
///
/// Walks pop entries depth-first, so when an entry at depth `d` is popped the
/// first `d - 1` segments of the shared prefix still spell its parent's path.
type Pending<'a, T> = (&'a str, T, usize);

fn intersect_nodes<'a>(a: &'a TrieNode, b: &'a TrieNode, results: &mut Vec<String>) {
    let mut prefix: Vec<&'a str> = Vec::new();
    let mut stack: Vec<Pending<'a, (&'a TrieNode, &'a TrieNode)>> = Vec::new();
    push_common_children(a, b, 1, &mut stack);

    while let Some((segment, (a, b), depth)) = stack.pop() {
        prefix.truncate(depth - 1);
        prefix.push(segment);
        if a.is_allowed() && b.is_allowed() {
            results.push(join_path(prefix.as_slice()));
        }
        push_common_children(a, b, depth + 1, &mut stack);
    }
}

fn push_common_children<'a>(
    a: &'a TrieNode,
    b: &'a TrieNode,
    depth: usize,
    stack: &mut Vec<Pending<'a, (&'a TrieNode, &'a TrieNode)>>,
) {
    // Probe the larger map from the smaller one.
    let (small, large) = if a.children().len() <= b.children().len() {
        (a, b)
    } else {
        (b, a)
    };

    for (segment, small_child) in small.children() {
        if let Some(large_child) = large.child(segment) {
            stack.push((segment.as_str(), (small_child, large_child), depth));
        }
    }
}

fn flatten_children<'a>(root: &'a TrieNode, results: &mut Vec<String>) {
    let mut prefix: Vec<&'a str> = Vec::new();
    let mut stack: Vec<Pending<'a, &'a TrieNode>> = root
        .children()
        .iter()
        .map(|(segment, child)| (segment.as_str(), child, 1))
        .collect();

    while let Some((segment, node, depth)) = stack.pop() {
        prefix.truncate(depth - 1);
        prefix.push(segment);

        if node.is_suppressed() {
            trace!(path = %join_path(prefix.as_slice()), "pruned suppressed subtree");
            continue;
        }
        if node.is_allowed() {
            results.push(join_path(prefix.as_slice()));
        }
        stack.extend(
            node.children()
                .iter()
                .map(|(segment, child)| (segment.as_str(), child, depth + 1)),
        );
    }
}
