//! Concurrent snapshot store
//!
//! This module publishes persistent trie versions to concurrent readers.

mod trie_store;

pub use trie_store::{TrieStore, ValueGuard};
