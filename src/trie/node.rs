//! Trie node types

use super::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Child links of a node, one per key-symbol
pub type Children = BTreeMap<u8, Arc<TrieNode>>;

/// A node in the persistent trie
///
/// A node without a value is a plain branch. A node with a value is a value
/// node; it may have children of its own when the key it stores is a prefix of
/// other keys.
///
/// Nodes are never mutated once they are reachable from a published
/// [`Trie`](super::Trie). `Clone` is shallow: the child map is copied, the
/// subtrees behind it are shared.
#[derive(Clone, Default)]
pub struct TrieNode {
    children: Children,
    value: Option<Value>,
}

impl TrieNode {
    /// Create a node with no children and no value
    pub fn empty() -> Self {
        TrieNode::default()
    }

    /// Create a value node on top of an existing child map
    pub fn with_value(children: Children, value: Value) -> Self {
        TrieNode {
            children,
            value: Some(value),
        }
    }

    /// Create a plain branch node
    pub fn branch(children: Children) -> Self {
        TrieNode {
            children,
            value: None,
        }
    }

    /// All child links
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// The child reached by `symbol`, if any
    pub fn child(&self, symbol: u8) -> Option<&Arc<TrieNode>> {
        self.children.get(&symbol)
    }

    /// Get the value at this exact node (if any)
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Check if this node carries a value
    pub fn is_value_node(&self) -> bool {
        self.value.is_some()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node with neither value nor children is dead weight and gets pruned
    pub(crate) fn is_prunable(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Same children, value dropped
    pub(crate) fn without_value(&self) -> Self {
        TrieNode::branch(self.children.clone())
    }

    pub(crate) fn set_child(&mut self, symbol: u8, child: Arc<TrieNode>) {
        self.children.insert(symbol, child);
    }

    pub(crate) fn remove_child(&mut self, symbol: u8) {
        self.children.remove(&symbol);
    }
}

impl Drop for TrieNode {
    /// Frees uniquely owned descendants from a worklist, one node at a time.
    /// Subtrees still referenced elsewhere are left alone.
    fn drop(&mut self) {
        let mut pending: Vec<Arc<TrieNode>> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(node) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(node) {
                pending.extend(std::mem::take(&mut node.children).into_values());
            }
        }
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("symbols", &self.children.keys().collect::<Vec<_>>())
            .field("value", &self.value)
            .finish()
    }
}
