//! Store paths for LRP records.
//!
//! ```text
//! desired/<process_guid>
//! actual/<process_guid>/<index>/<instance_guid>
//! ```
//!
//! Every bulk query walks a fixed depth below these roots, so the builders
//! and [`parse_key`] must stay in lockstep.

use lrpgrid_models::{ActualLrp, DesiredLrp};
use lrpgrid_store::normalize_key;

pub const DESIRED_LRP_SCHEMA_ROOT: &str = "desired";
pub const ACTUAL_LRP_SCHEMA_ROOT: &str = "actual";

/// Levels between the actual root and a record leaf: process, index, instance.
pub const ACTUAL_LRP_DEPTH: usize = 3;

pub fn desired_lrp_schema_path(process_guid: &str) -> String {
    format!("{DESIRED_LRP_SCHEMA_ROOT}/{process_guid}")
}

pub fn desired_lrp_schema_path_for(lrp: &DesiredLrp) -> String {
    desired_lrp_schema_path(&lrp.process_guid)
}

/// Directory holding every index of one process.
pub fn actual_lrp_process_dir(process_guid: &str) -> String {
    format!("{ACTUAL_LRP_SCHEMA_ROOT}/{process_guid}")
}

/// Directory holding every instance attempt at one index.
pub fn actual_lrp_index_dir(process_guid: &str, index: u32) -> String {
    format!("{ACTUAL_LRP_SCHEMA_ROOT}/{process_guid}/{index}")
}

pub fn actual_lrp_schema_path(process_guid: &str, index: u32, instance_guid: &str) -> String {
    format!("{ACTUAL_LRP_SCHEMA_ROOT}/{process_guid}/{index}/{instance_guid}")
}

pub fn actual_lrp_schema_path_for(lrp: &ActualLrp) -> String {
    actual_lrp_schema_path(&lrp.process_guid, lrp.index, &lrp.instance_guid)
}

/// A record location decoded from a store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKey {
    Desired {
        process_guid: String,
    },
    Actual {
        process_guid: String,
        index: u32,
        instance_guid: String,
    },
}

impl SchemaKey {
    /// Render back to the store path.
    pub fn path(&self) -> String {
        match self {
            SchemaKey::Desired { process_guid } => desired_lrp_schema_path(process_guid),
            SchemaKey::Actual {
                process_guid,
                index,
                instance_guid,
            } => actual_lrp_schema_path(process_guid, *index, instance_guid),
        }
    }
}

/// Decode a record leaf key. Returns `None` for directories, foreign
/// roots, wrong depths, and non-numeric indexes.
pub fn parse_key(key: &str) -> Option<SchemaKey> {
    let key = normalize_key(key);
    let segments: Vec<&str> = key.split('/').collect();
    match segments.as_slice() {
        [DESIRED_LRP_SCHEMA_ROOT, process_guid] => Some(SchemaKey::Desired {
            process_guid: process_guid.to_string(),
        }),
        [ACTUAL_LRP_SCHEMA_ROOT, process_guid, index, instance_guid] => Some(SchemaKey::Actual {
            process_guid: process_guid.to_string(),
            index: index.parse().ok()?,
            instance_guid: instance_guid.to_string(),
        }),
        _ => None,
    }
}
