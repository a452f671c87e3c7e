//! Search-subsystem error type.

use thiserror::Error;

use map_core::LocationId;

/// Errors produced by `map-search`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("location {0} was already added")]
    DuplicateLocation(LocationId),

    #[error("location {0} has not been added")]
    UnknownLocation(LocationId),
}

pub type SearchResult<T> = Result<T, SearchError>;
