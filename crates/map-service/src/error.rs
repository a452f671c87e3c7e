use map_core::{CoreError, GeoPoint};
use map_raster::RasterError;
use map_search::SearchError;
use map_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("coordinate {0} is not finite")]
    InvalidCoordinate(GeoPoint),

    #[error("could not start worker pool: {0}")]
    ThreadPool(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
