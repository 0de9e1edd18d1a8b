//! LrpBbs — read queries over desired and actual LRPs.
//!
//! Each bulk query issues one recursive listing and walks the returned
//! tree locally. A malformed leaf aborts the walk; the records decoded
//! before it are discarded and only the key-attributed error is returned.

use std::sync::Arc;

use lrpgrid_models::{ActualLrp, ActualLrpState, DesiredLrp, decode_actual_lrp, decode_desired_lrp};
use lrpgrid_store::{StoreAdapter, StoreError, StoreNode};
use tracing::debug;

use crate::error::BbsResult;
use crate::filter::filter_actual_lrps;
use crate::schema::{
    ACTUAL_LRP_DEPTH, ACTUAL_LRP_SCHEMA_ROOT, DESIRED_LRP_SCHEMA_ROOT, actual_lrp_index_dir,
    actual_lrp_process_dir, desired_lrp_schema_path,
};

/// Read-only query service over a shared store client.
#[derive(Clone)]
pub struct LrpBbs {
    store: Arc<dyn StoreAdapter>,
}

impl LrpBbs {
    pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
        Self { store }
    }

    // ── Desired ────────────────────────────────────────────────────

    /// Every desired LRP. An unpopulated namespace yields an empty list.
    pub fn list_desired_lrps(&self) -> BbsResult<Vec<DesiredLrp>> {
        let Some(root) = self.list_or_empty(DESIRED_LRP_SCHEMA_ROOT)? else {
            return Ok(Vec::new());
        };

        let mut lrps = Vec::with_capacity(root.child_nodes.len());
        for node in &root.child_nodes {
            lrps.push(decode_desired_lrp(&node.key, &node.value)?);
        }
        debug!(count = lrps.len(), "listed desired lrps");
        Ok(lrps)
    }

    /// The desired LRP for `process_guid`.
    ///
    /// Absence is an error here: the caller named a record it expects.
    pub fn get_desired_lrp(&self, process_guid: &str) -> BbsResult<DesiredLrp> {
        let node = self.store.get(&desired_lrp_schema_path(process_guid))?;
        Ok(decode_desired_lrp(&node.key, &node.value)?)
    }

    // ── Actual ─────────────────────────────────────────────────────

    /// Every actual LRP in the cluster, flattened across processes and indexes.
    pub fn list_actual_lrps(&self) -> BbsResult<Vec<ActualLrp>> {
        self.collect_actual(ACTUAL_LRP_SCHEMA_ROOT, ACTUAL_LRP_DEPTH)
    }

    /// Every actual LRP recorded for `process_guid`, across all indexes.
    pub fn list_actual_lrps_for_process(&self, process_guid: &str) -> BbsResult<Vec<ActualLrp>> {
        self.collect_actual(&actual_lrp_process_dir(process_guid), ACTUAL_LRP_DEPTH - 1)
    }

    /// Every instance attempt recorded at one index of `process_guid`.
    pub fn list_actual_lrps_for_index(
        &self,
        process_guid: &str,
        index: u32,
    ) -> BbsResult<Vec<ActualLrp>> {
        self.collect_actual(&actual_lrp_index_dir(process_guid, index), ACTUAL_LRP_DEPTH - 2)
    }

    pub fn list_running_actual_lrps(&self) -> BbsResult<Vec<ActualLrp>> {
        let lrps = self.list_actual_lrps()?;
        Ok(filter_actual_lrps(lrps, ActualLrpState::Running))
    }

    pub fn list_running_actual_lrps_for_process(
        &self,
        process_guid: &str,
    ) -> BbsResult<Vec<ActualLrp>> {
        let lrps = self.list_actual_lrps_for_process(process_guid)?;
        Ok(filter_actual_lrps(lrps, ActualLrpState::Running))
    }

    // ── Traversal ──────────────────────────────────────────────────

    /// Recursive listing where a missing subtree means "nothing yet".
    fn list_or_empty(&self, key: &str) -> BbsResult<Option<StoreNode>> {
        match self.store.list_recursively(key) {
            Ok(node) => Ok(Some(node)),
            Err(StoreError::KeyNotFound(_)) => {
                debug!(%key, "subtree absent, treating as empty");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List `key` and decode every node `depth` levels below it.
    fn collect_actual(&self, key: &str, depth: usize) -> BbsResult<Vec<ActualLrp>> {
        let Some(root) = self.list_or_empty(key)? else {
            return Ok(Vec::new());
        };

        let mut lrps = Vec::new();
        for child in &root.child_nodes {
            decode_leaves(child, depth - 1, &mut lrps)?;
        }
        debug!(%key, count = lrps.len(), "listed actual lrps");
        Ok(lrps)
    }
}

/// Descend `depth` more levels from `node`, decoding what sits there.
fn decode_leaves(node: &StoreNode, depth: usize, out: &mut Vec<ActualLrp>) -> BbsResult<()> {
    if depth == 0 {
        out.push(decode_actual_lrp(&node.key, &node.value)?);
        return Ok(());
    }
    for child in &node.child_nodes {
        decode_leaves(child, depth - 1, out)?;
    }
    Ok(())
}
