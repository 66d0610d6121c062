//! # cow_trie
//!
//! A persistent copy-on-write trie for snapshot-isolated key-value state.
//!
//! Every mutation returns a new version of the trie while all earlier
//! versions stay valid and unchanged. Versions share every subtree the
//! mutation did not touch, so a write costs one node per key symbol.
//!
//! ## Core Concepts
//!
//! - **Trie**: An immutable version handle; `put`/`remove` return new ones
//! - **TrieNode**: A node with byte-keyed children and an optional value
//! - **Value**: A type-tagged payload; reads with the wrong type miss
//! - **TrieStore**: Publishes versions to concurrent readers (feature `store`)
//!
//! ## Example
//!
//! ```
//! use cow_trie::Trie;
//!
//! let v1 = Trie::empty().put("a", 1u32);
//! let v2 = v1.put("ab", String::from("two"));
//! let v3 = v2.remove("a");
//!
//! assert_eq!(v1.get::<u32>("a"), Some(&1));
//! assert_eq!(v3.get::<u32>("a"), None);
//! assert_eq!(v3.get::<String>("ab").map(String::as_str), Some("two"));
//! ```

#[cfg(feature = "store")]
pub mod store;
pub mod trie;

mod error;

pub use error::{Error, Result};
#[cfg(feature = "store")]
pub use store::{TrieStore, ValueGuard};
pub use trie::{Children, Trie, TrieNode, Value};
