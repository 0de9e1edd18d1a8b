//! The read contract the query layer consumes.

use crate::error::StoreResult;
use crate::node::StoreNode;

/// Read access to a hierarchical key/value store.
///
/// Implementations normalize keys with [`normalize_key`](crate::normalize_key)
/// and must report absence as [`StoreError::KeyNotFound`](crate::StoreError)
/// so callers can pattern-match it.
pub trait StoreAdapter: Send + Sync {
    /// Fetch the single node at `key`.
    ///
    /// A leaf comes back with its value. A key that only exists as a prefix
    /// of deeper keys comes back as a directory node without children.
    fn get(&self, key: &str) -> StoreResult<StoreNode>;

    /// Fetch the node at `key` with its entire subtree attached.
    fn list_recursively(&self, key: &str) -> StoreResult<StoreNode>;
}
