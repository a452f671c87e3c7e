//! Raster-subsystem error type.

use thiserror::Error;

use map_core::CoreError;

/// Errors produced by `map-raster`.
///
/// Only construction can fail.  A query that cannot be answered is reported
/// through [`TileGrid::rejected`](crate::TileGrid::rejected), not an error.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error(transparent)]
    Config(#[from] CoreError),
}

pub type RasterResult<T> = Result<T, RasterError>;
