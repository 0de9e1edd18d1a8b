//! In-process store adapter over an ordered map.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::adapter::StoreAdapter;
use crate::error::{StoreError, StoreResult};
use crate::node::{StoreNode, build_tree, in_subtree, is_strict_descendant, normalize_key};

/// Thread-safe in-memory store. Cloning shares the same contents.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the leaf at `key`.
    pub fn set(&self, key: &str, value: impl Into<Vec<u8>>) -> StoreResult<()> {
        let key = normalize_key(key);
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key, value.into());
        Ok(())
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

impl StoreAdapter for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<StoreNode> {
        let key = normalize_key(key);
        let entries = self.entries.read().map_err(poisoned)?;
        if let Some(value) = entries.get(&key) {
            return Ok(StoreNode::leaf(key, value.clone()));
        }
        let below = entries
            .range::<str, _>((Bound::Included(key.as_str()), Bound::Unbounded))
            .map(|(k, _)| k)
            .take_while(|k| k.starts_with(key.as_str()))
            .any(|k| is_strict_descendant(&key, k));
        if below {
            return Ok(StoreNode::dir(key));
        }
        Err(StoreError::KeyNotFound(key))
    }

    fn list_recursively(&self, key: &str) -> StoreResult<StoreNode> {
        let key = normalize_key(key);
        let entries = self.entries.read().map_err(poisoned)?;
        let subtree = entries
            .range::<str, _>((Bound::Included(key.as_str()), Bound::Unbounded))
            .take_while(|(k, _)| k.starts_with(key.as_str()))
            .filter(|(k, _)| in_subtree(&key, k))
            .map(|(k, v)| (k.clone(), v.clone()));
        let node = build_tree(&key, subtree).ok_or_else(|| StoreError::KeyNotFound(key.clone()))?;
        trace!(%key, children = node.child_nodes.len(), "listed subtree");
        Ok(node)
    }
}
