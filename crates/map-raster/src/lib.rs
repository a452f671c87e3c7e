//! `map-raster` — choose the pre-rendered tiles that cover a viewport.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`selector`] | `TileSelector`, `RasterRequest`, `TileGrid`                |
//! | [`error`]    | `RasterError`, `RasterResult<T>`                           |
//!
//! The selector is pure geometry: it never touches image files, it only names
//! them.

pub mod error;
pub mod selector;


pub use error::{RasterError, RasterResult};
pub use selector::{RasterRequest, TileGrid, TileSelector, tile_file_name};
