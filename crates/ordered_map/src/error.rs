//! Errors reported by [`OrderedMap`](crate::OrderedMap) operations

use std::collections::TryReserveError;

use thiserror::Error;

/// Failure of a map operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MapError {
    /// The requested key is not present.
    #[error("key not found")]
    NotFound,
    /// Storage for a new entry could not be reserved.
    #[error("out of memory")]
    OutOfMemory,
}

impl From<TryReserveError> for MapError {
    fn from(_: TryReserveError) -> Self {
        MapError::OutOfMemory
    }
}

pub type MapResult<T> = Result<T, MapError>;
