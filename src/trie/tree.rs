//! Persistent trie versions and the copy-on-write rebuild

use super::{TrieNode, Value};
use crate::{Error, Result};
use log::trace;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An immutable version of the trie
///
/// Every mutation returns a new `Trie` and leaves `self` untouched. Only the
/// nodes on the root-to-key path are freshly allocated; every other subtree is
/// shared with the source version by reference.
///
/// Cloning a `Trie` is cheap: it clones the root handle.
#[derive(Clone, Default)]
pub struct Trie {
    /// `None` for the empty trie
    root: Option<Arc<TrieNode>>,
}

impl Trie {
    /// Create a new empty trie
    pub fn new() -> Self {
        Trie { root: None }
    }

    /// The empty version
    pub fn empty() -> Self {
        Trie::new()
    }

    fn from_root(root: Arc<TrieNode>) -> Self {
        Trie { root: Some(root) }
    }

    /// Get the root node, `None` for the empty trie
    pub fn root(&self) -> Option<&Arc<TrieNode>> {
        self.root.as_ref()
    }

    /// Check if two versions share the same root node
    pub fn ptr_eq(&self, other: &Trie) -> bool {
        match (&self.root, &other.root) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }

    /// Check if no key holds a value
    ///
    /// The root is never pruned, so a trie emptied by `remove` keeps a bare
    /// root node and still counts as empty.
    pub fn is_empty(&self) -> bool {
        self.root.as_deref().map_or(true, TrieNode::is_prunable)
    }

    /// Check if any value is stored under `key`, whatever its type
    pub fn contains_key(&self, key: impl AsRef<[u8]>) -> bool {
        self.find(key.as_ref()).map_or(false, TrieNode::is_value_node)
    }

    /// Get a value by key
    ///
    /// Returns `None` when the key is absent or holds a value of another type.
    pub fn get<T: Any>(&self, key: impl AsRef<[u8]>) -> Option<&T> {
        self.try_get(key).ok()
    }

    /// Get a value by key, reporting why a lookup failed
    pub fn try_get<T: Any>(&self, key: impl AsRef<[u8]>) -> Result<&T> {
        let key = key.as_ref();
        let value = self
            .find(key)
            .and_then(TrieNode::value)
            .ok_or_else(|| Error::key_not_found(key))?;
        value.downcast_ref::<T>().ok_or_else(|| {
            Error::type_mismatch(key, std::any::type_name::<T>(), value.type_name())
        })
    }

    /// Get a shared handle to a value that outlives this version
    pub fn get_shared<T: Any + Send + Sync>(&self, key: impl AsRef<[u8]>) -> Option<Arc<T>> {
        self.find(key.as_ref())?.value()?.downcast_arc::<T>()
    }

    /// Return a new version with `key` mapped to `value`
    ///
    /// Any descendants of `key` are kept. `value` is moved into the new node
    /// and never copied.
    pub fn put<T: Send + Sync + 'static>(&self, key: impl AsRef<[u8]>, value: T) -> Trie {
        let key = key.as_ref();
        trace!("put: key_len={} type={}", key.len(), std::any::type_name::<T>());

        // Existing node at each depth of the key path, `None` once the path
        // leaves the source version.
        let mut path: Vec<Option<&TrieNode>> = Vec::with_capacity(key.len() + 1);
        let mut cursor = self.root.as_deref();
        path.push(cursor);
        for &symbol in key {
            cursor = cursor.and_then(|node| node.child(symbol)).map(|child| &**child);
            path.push(cursor);
        }

        let target = path.pop().flatten();
        let children = target
            .map(|node| node.children().clone())
            .unwrap_or_default();
        let mut rebuilt = TrieNode::with_value(children, Value::new(value));

        for (&symbol, original) in key.iter().zip(path).rev() {
            let mut parent = original.cloned().unwrap_or_default();
            parent.set_child(symbol, Arc::new(rebuilt));
            rebuilt = parent;
        }

        Trie::from_root(Arc::new(rebuilt))
    }

    /// Return a new version in which `key` holds no value
    ///
    /// Removing an absent key returns a version sharing the source root.
    /// Ancestors left with neither value nor children are pruned, up to but
    /// excluding the root.
    pub fn remove(&self, key: impl AsRef<[u8]>) -> Trie {
        let key = key.as_ref();
        let Some(root) = self.root.as_deref() else {
            return self.clone();
        };

        let mut parents: Vec<&TrieNode> = Vec::with_capacity(key.len());
        let mut node = root;
        for &symbol in key {
            let Some(child) = node.child(symbol) else {
                trace!("remove: key_len={} absent", key.len());
                return self.clone();
            };
            parents.push(node);
            node = child;
        }

        if !node.is_value_node() {
            trace!("remove: key_len={} holds no value", key.len());
            return self.clone();
        }

        // Replacement for the slot being rebuilt; `None` prunes it.
        let mut rebuilt = if node.is_leaf() {
            None
        } else {
            Some(node.without_value())
        };

        for (&symbol, original) in key.iter().zip(parents).rev() {
            let mut parent = original.clone();
            match rebuilt {
                Some(child) => parent.set_child(symbol, Arc::new(child)),
                None => parent.remove_child(symbol),
            }
            rebuilt = Some(parent).filter(|parent| !parent.is_prunable());
        }

        trace!("remove: key_len={} done", key.len());
        Trie::from_root(Arc::new(rebuilt.unwrap_or_default()))
    }

    fn find(&self, key: &[u8]) -> Option<&TrieNode> {
        let mut node = self.root.as_deref()?;
        for &symbol in key {
            node = node.child(symbol)?;
        }
        Some(node)
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("root", &self.root.as_ref().map(Arc::as_ptr))
            .field("empty", &self.is_empty())
            .finish()
    }
}
