//! lrpgrid-store — hierarchical key/value store client.
//!
//! Models the coordination store the LRP query layer reads from: keys are
//! `/`-separated paths, every lookup returns an owned [`StoreNode`] tree,
//! and "key not found" is a distinct [`StoreError::KeyNotFound`] variant so
//! callers can tell absence apart from a failing store.
//!
//! # Adapters
//!
//! - [`MemoryStore`]: ordered in-process map, used by tests and fixtures.
//! - [`RedbStore`]: [redb](https://docs.rs/redb)-backed table of
//!   `path → bytes`, on disk or in memory.
//!
//! Both are `Clone` + `Send` + `Sync` and can be shared across threads.

pub mod adapter;
pub mod error;
pub mod memory;
pub mod node;
pub mod redb_store;
pub mod tables;

pub use adapter::StoreAdapter;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use node::{StoreNode, normalize_key};
pub use redb_store::RedbStore;
