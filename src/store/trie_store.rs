//! Thread-safe key-value store over persistent trie versions
//!
//! Readers clone the current root under a short lock and then work on that
//! snapshot without holding any lock. Writers are serialized by a separate
//! lock, build the next version off to the side, and publish it by swapping
//! the root. A reader therefore never sees a half-built version and never
//! waits for a writer's rebuild walk.

use crate::trie::Trie;
use log::debug;
use parking_lot::Mutex;
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A value read from a [`TrieStore`]
///
/// Keeps the value alive after later writes replace or remove it.
pub struct ValueGuard<T> {
    value: Arc<T>,
}

impl<T> ValueGuard<T> {
    fn new(value: Arc<T>) -> Self {
        ValueGuard { value }
    }

    /// Convert into the underlying shared handle
    pub fn into_inner(self) -> Arc<T> {
        self.value
    }
}

impl<T> Deref for ValueGuard<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Clone for ValueGuard<T> {
    fn clone(&self) -> Self {
        ValueGuard {
            value: Arc::clone(&self.value),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueGuard").field(&*self.value).finish()
    }
}

/// A concurrent key-value store backed by persistent trie versions
pub struct TrieStore {
    /// The published version
    root: Mutex<Trie>,
    /// Serializes writers
    write_lock: Mutex<()>,
}

impl TrieStore {
    /// Create a new empty store
    pub fn new() -> Self {
        TrieStore::from_trie(Trie::empty())
    }

    /// Create a store publishing an existing version
    pub fn from_trie(trie: Trie) -> Self {
        TrieStore {
            root: Mutex::new(trie),
            write_lock: Mutex::new(()),
        }
    }

    /// The currently published version
    pub fn snapshot(&self) -> Trie {
        self.root.lock().clone()
    }

    /// Get a value by key
    ///
    /// Returns `None` when the key is absent or holds a value of another type.
    pub fn get<T: Any + Send + Sync>(&self, key: impl AsRef<[u8]>) -> Option<ValueGuard<T>> {
        let snapshot = self.snapshot();
        snapshot.get_shared::<T>(key).map(ValueGuard::new)
    }

    /// Store `value` under `key`
    pub fn put<T: Send + Sync + 'static>(&self, key: impl AsRef<[u8]>, value: T) {
        let _writer = self.write_lock.lock();
        let next = self.snapshot().put(key, value);
        self.publish(next);
    }

    /// Remove the value under `key`, if any
    pub fn remove(&self, key: impl AsRef<[u8]>) {
        let _writer = self.write_lock.lock();
        let current = self.snapshot();
        let next = current.remove(key);
        if next.ptr_eq(&current) {
            return;
        }
        self.publish(next);
    }

    fn publish(&self, next: Trie) {
        // The old version is dropped outside the root lock.
        let _previous = std::mem::replace(&mut *self.root.lock(), next);
        debug!("published new trie version");
    }
}

impl Default for TrieStore {
    fn default() -> Self {
        TrieStore::new()
    }
}

impl fmt::Debug for TrieStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieStore")
            .field("root", &*self.root.lock())
            .finish()
    }
}
