//! RedbStore — redb-backed hierarchical store adapter.
//!
//! Leaves are stored flat in the [`NODES`] table keyed by their full path;
//! subtree listings are assembled from a key scan inside one read
//! transaction, so a listing is a consistent snapshot.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable};
use tracing::debug;

use crate::adapter::StoreAdapter;
use crate::error::{StoreError, StoreResult};
use crate::node::{StoreNode, build_tree, in_subtree, is_strict_descendant, normalize_key};
use crate::tables::NODES;

/// Convert any `Display` error into a `StoreError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StoreError::$variant(e.to_string())
    };
}

/// Thread-safe store backed by redb.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open (or create) a persistent store at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "redb store opened");
        Ok(store)
    }

    /// Open a store that must already exist. Never creates a file.
    pub fn open_existing(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::Open(format!("{} does not exist", path.display())));
        }
        let db = Database::open(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "existing redb store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory redb store opened");
        Ok(store)
    }

    fn ensure_tables(&self) -> StoreResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        // Opening a table in a write transaction creates it if absent.
        txn.open_table(NODES).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }

    /// Insert or overwrite the leaf at `key`.
    pub fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        self.set_many([(key.to_string(), value.to_vec())])?;
        Ok(())
    }

    /// Write several leaves in a single transaction.
    pub fn set_many<I>(&self, entries: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let mut count = 0;
        {
            let mut table = txn.open_table(NODES).map_err(map_err!(Table))?;
            for (key, value) in entries {
                let key = normalize_key(&key);
                table
                    .insert(key.as_str(), value.as_slice())
                    .map_err(map_err!(Write))?;
                count += 1;
            }
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(count, "leaves stored");
        Ok(count)
    }
}

impl StoreAdapter for RedbStore {
    fn get(&self, key: &str) -> StoreResult<StoreNode> {
        let key = normalize_key(key);
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(NODES).map_err(map_err!(Table))?;
        if let Some(guard) = table.get(key.as_str()).map_err(map_err!(Read))? {
            return Ok(StoreNode::leaf(key.clone(), guard.value().to_vec()));
        }
        // Keys sharing the prefix are contiguous from `key` onwards.
        for entry in table.range(key.as_str()..).map_err(map_err!(Read))? {
            let (k, _) = entry.map_err(map_err!(Read))?;
            if !k.value().starts_with(key.as_str()) {
                break;
            }
            if is_strict_descendant(&key, k.value()) {
                return Ok(StoreNode::dir(key.clone()));
            }
        }
        Err(StoreError::KeyNotFound(key))
    }

    fn list_recursively(&self, key: &str) -> StoreResult<StoreNode> {
        let key = normalize_key(key);
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(NODES).map_err(map_err!(Table))?;
        let mut subtree = Vec::new();
        for entry in table.range(key.as_str()..).map_err(map_err!(Read))? {
            let (k, v) = entry.map_err(map_err!(Read))?;
            if !k.value().starts_with(key.as_str()) {
                break;
            }
            if in_subtree(&key, k.value()) {
                subtree.push((k.value().to_string(), v.value().to_vec()));
            }
        }
        let leaves = subtree.len();
        let node = build_tree(&key, subtree).ok_or_else(|| StoreError::KeyNotFound(key.clone()))?;
        debug!(%key, leaves, "listed subtree");
        Ok(node)
    }
}
