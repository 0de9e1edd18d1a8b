//! lrpgrid-models — long-running process records.
//!
//! A [`DesiredLrp`] declares what should run; an [`ActualLrp`] reports one
//! observed instance. Both are stored as JSON written by external
//! producers, so field names and state strings here follow that wire
//! format exactly.
//!
//! Decoding is strict: a payload either yields a fully valid record or an
//! error. [`codec`] attaches the originating store key to failures.

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{DecodeError, decode_actual_lrp, decode_desired_lrp};
pub use error::{ModelError, ModelResult};
pub use types::*;
