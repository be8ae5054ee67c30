//! Spatial data structures
//!
//! - Pixel grids and the raster traits every stage reads through
//! - Tiles and the regular partition of an image
//! - Assemblies that place tiles onto a target image

/// Tile placement onto a target image
pub mod assembly;
/// Pixel grids and raster access traits
pub mod grid;
/// Tiles, tile views and image partitioning
pub mod tiles;

pub use grid::{PixelGrid, Raster, RasterMut};
