//! The trie node: one path segment's worth of policy state.

use std::collections::HashMap;

/// A node in the policy trie.
///
/// Each node owns its children outright, so dropping a node drops its whole
/// subtree. Teardown, equality and the subtree walks use an explicit work-list,
/// so path depth is bounded by memory rather than by the call stack. The two flags are independent: a node may be allowed, suppressed,
/// both, or neither (an intermediate segment that was never registered).
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    is_allowed: bool,
    is_suppressed: bool,
    children: HashMap<String, TrieNode>,
}

impl TrieNode {
    /// Create a node with both flags cleared and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if this exact path was registered with `allow_path`.
    pub fn is_allowed(&self) -> bool {
        self.is_allowed
    }

    /// True if this exact path was registered with `suppress_path`.
    pub fn is_suppressed(&self) -> bool {
        self.is_suppressed
    }

    /// The children of this node, keyed by segment.
    pub fn children(&self) -> &HashMap<String, TrieNode> {
        &self.children
    }

    /// Look up the child for a single segment.
    pub fn child(&self, segment: &str) -> Option<&TrieNode> {
        self.children.get(segment)
    }

    /// True if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn allow(&mut self) {
        self.is_allowed = true;
    }

    pub(crate) fn suppress(&mut self) {
        self.is_suppressed = true;
    }

    /// Get the child for `segment`, creating an empty one if it is missing.
    pub(crate) fn child_or_insert(&mut self, segment: &str) -> &mut TrieNode {
        self.children.entry(segment.to_string()).or_default()
    }

    /// Number of nodes in this subtree, not counting `self`.
    pub(crate) fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TrieNode> = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.values());
        }
        count
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack: Vec<(&TrieNode, &TrieNode)> = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.is_allowed != b.is_allowed
                || a.is_suppressed != b.is_suppressed
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for (segment, a_child) in &a.children {
                let Some(b_child) = b.children.get(segment) else {
                    return false;
                };
                stack.push((a_child, b_child));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach children before they drop so each node is freed with no subtree.
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}
