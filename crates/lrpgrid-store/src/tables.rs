//! redb table definitions for the on-disk store adapter.
//!
//! The namespace is stored flat: one row per leaf, keyed by its full
//! normalized path. Directory nodes are implied by key prefixes.

use redb::TableDefinition;

/// Leaf payloads keyed by `{segment}/{segment}/...`.
pub const NODES: TableDefinition<&str, &[u8]> = TableDefinition::new("nodes");
