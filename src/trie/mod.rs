//! Persistent copy-on-write trie
//!
//! This implements an immutable, versioned prefix tree where:
//! - Every `put`/`remove` returns a new version and leaves the old one intact
//! - Only the nodes on the root-to-key path are allocated per mutation
//! - Untouched subtrees are shared between versions through reference counts

mod node;
mod tree;
mod value;

pub use node::{Children, TrieNode};
pub use tree::Trie;
pub use value::Value;
