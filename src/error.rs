//! Error types for cow_trie

use thiserror::Error;

/// Result type alias for cow_trie operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a lookup can come back empty
///
/// Both variants are ordinary outcomes, not faults. [`crate::Trie::get`]
/// folds them into `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Type mismatch at key {key}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn key_not_found(key: &[u8]) -> Self {
        Error::KeyNotFound(render_key(key))
    }

    pub(crate) fn type_mismatch(key: &[u8], expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch {
            key: render_key(key),
            expected,
            found,
        }
    }

    /// Check if this error means "nothing stored under the key"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }
}

fn render_key(key: &[u8]) -> String {
    format!("{:?}", String::from_utf8_lossy(key))
}
