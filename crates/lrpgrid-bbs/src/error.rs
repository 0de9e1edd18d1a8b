//! Query error union.

use lrpgrid_models::DecodeError;
use lrpgrid_store::StoreError;
use thiserror::Error;

pub type BbsResult<T> = Result<T, BbsError>;

/// Errors returned by [`LrpBbs`](crate::LrpBbs) queries.
///
/// Store failures (including a not-found single lookup) arrive as
/// [`BbsError::Store`] unchanged; malformed payloads as [`BbsError::Decode`]
/// carrying the offending key.
#[derive(Debug, Error)]
pub enum BbsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl BbsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BbsError::Store(e) if e.is_not_found())
    }

    /// Key of the malformed record, if this is a decode failure.
    pub fn decode_key(&self) -> Option<&str> {
        match self {
            BbsError::Decode(e) => Some(e.key.as_str()),
            BbsError::Store(_) => None,
        }
    }
}
