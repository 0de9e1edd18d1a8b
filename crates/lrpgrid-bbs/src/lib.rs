//! lrpgrid-bbs — read-side queries over LRP placement state.
//!
//! Reads what *should* run (desired LRPs) and what *is* running (actual
//! LRPs) from a hierarchical store and hands back typed snapshots. Nothing
//! here writes, caches, or retries.
//!
//! # Namespace
//!
//! ```text
//! desired/<process_guid>                         → DesiredLrp JSON
//! actual/<process_guid>/<index>/<instance_guid>  → ActualLrp JSON
//! ```
//!
//! # Absence
//!
//! Bulk listings treat a missing subtree as an empty result. A lookup of
//! one named desired LRP treats it as an error.

pub mod error;
pub mod filter;
pub mod lrp_getters;
pub mod schema;

pub use error::{BbsError, BbsResult};
pub use filter::filter_actual_lrps;
pub use lrp_getters::LrpBbs;
