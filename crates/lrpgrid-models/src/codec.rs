//! Key-attributed decoding of stored payloads.

use thiserror::Error;

use crate::error::ModelError;
use crate::types::{ActualLrp, DesiredLrp};

/// A stored payload at `key` could not be decoded.
#[derive(Debug, Error)]
#[error("malformed record at {key}: {source}")]
pub struct DecodeError {
    pub key: String,
    #[source]
    pub source: ModelError,
}

pub fn decode_desired_lrp(key: &str, payload: &[u8]) -> Result<DesiredLrp, DecodeError> {
    DesiredLrp::from_json(payload).map_err(|source| DecodeError {
        key: key.to_string(),
        source,
    })
}

pub fn decode_actual_lrp(key: &str, payload: &[u8]) -> Result<ActualLrp, DecodeError> {
    ActualLrp::from_json(payload).map_err(|source| DecodeError {
        key: key.to_string(),
        source,
    })
}
