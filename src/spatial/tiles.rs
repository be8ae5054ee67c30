//! Rectangular tiles and the partition of an image into them

use crate::io::error::{Result, invalid_dimensions};
use crate::spatial::grid::{Raster, RasterMut};

/// A rectangle in source-image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    source_x: usize,
    source_y: usize,
    width: usize,
    height: usize,
}

impl Tile {
    /// Create a tile with its top-left corner at `(source_x, source_y)`
    pub const fn new(source_x: usize, source_y: usize, width: usize, height: usize) -> Self {
        Self {
            source_x,
            source_y,
            width,
            height,
        }
    }

    /// X coordinate of the top-left corner in the source image
    pub const fn source_x(&self) -> usize {
        self.source_x
    }

    /// Y coordinate of the top-left corner in the source image
    pub const fn source_y(&self) -> usize {
        self.source_y
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read view over `raster` in tile-local coordinates
    pub const fn view<'a, R: Raster + ?Sized>(&self, raster: &'a R) -> TileView<'a, R> {
        TileView { tile: *self, raster }
    }

    /// Read/write view over `raster` in tile-local coordinates
    pub const fn view_mut<'a, R: RasterMut + ?Sized>(
        &self,
        raster: &'a mut R,
    ) -> TileViewMut<'a, R> {
        TileViewMut { tile: *self, raster }
    }

    const fn translate(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        if x < self.width && y < self.height {
            Some((self.source_x + x, self.source_y + y))
        } else {
            None
        }
    }
}

/// Image seen through a tile
#[derive(Debug)]
pub struct TileView<'a, R: ?Sized> {
    tile: Tile,
    raster: &'a R,
}

impl<R: Raster + ?Sized> Raster for TileView<'_, R> {
    fn width(&self) -> usize {
        self.tile.width
    }

    fn height(&self) -> usize {
        self.tile.height
    }

    fn intensity(&self, x: usize, y: usize) -> i32 {
        self.tile
            .translate(x, y)
            .map_or(0, |(sx, sy)| self.raster.intensity(sx, sy))
    }

    fn direction(&self, x: usize, y: usize) -> Option<f64> {
        self.tile
            .translate(x, y)
            .and_then(|(sx, sy)| self.raster.direction(sx, sy))
    }
}

/// Mutable image seen through a tile
#[derive(Debug)]
pub struct TileViewMut<'a, R: ?Sized> {
    tile: Tile,
    raster: &'a mut R,
}

impl<R: Raster + ?Sized> Raster for TileViewMut<'_, R> {
    fn width(&self) -> usize {
        self.tile.width
    }

    fn height(&self) -> usize {
        self.tile.height
    }

    fn intensity(&self, x: usize, y: usize) -> i32 {
        self.tile
            .translate(x, y)
            .map_or(0, |(sx, sy)| self.raster.intensity(sx, sy))
    }

    fn direction(&self, x: usize, y: usize) -> Option<f64> {
        self.tile
            .translate(x, y)
            .and_then(|(sx, sy)| self.raster.direction(sx, sy))
    }
}

impl<R: RasterMut + ?Sized> RasterMut for TileViewMut<'_, R> {
    fn set_intensity(&mut self, x: usize, y: usize, value: i32) {
        if let Some((sx, sy)) = self.tile.translate(x, y) {
            self.raster.set_intensity(sx, sy, value);
        }
    }

    fn set_direction(&mut self, x: usize, y: usize, direction: Option<f64>) {
        if let Some((sx, sy)) = self.tile.translate(x, y) {
            self.raster.set_direction(sx, sy, direction);
        }
    }
}

/// Tiles produced by cutting an image at regular spacings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayout {
    tiles: Vec<Tile>,
    columns: usize,
    rows: usize,
    image_width: usize,
    image_height: usize,
}

impl TileLayout {
    /// Cut a `width` x `height` image every `spacing_x` columns and `spacing_y` rows
    ///
    /// Tiles are ordered column by column: the tile in grid cell `(column, row)`
    /// sits at index `column * rows + row`. Tiles on the right and bottom edges
    /// shrink to fit the image.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if a spacing is zero or the image is empty
    pub fn partition(
        width: usize,
        height: usize,
        spacing_x: usize,
        spacing_y: usize,
    ) -> Result<Self> {
        if spacing_x == 0 || spacing_y == 0 {
            return Err(invalid_dimensions(
                spacing_x,
                spacing_y,
                &"tile spacing must be positive",
            ));
        }
        if width == 0 || height == 0 {
            return Err(invalid_dimensions(width, height, &"image is empty"));
        }

        let columns = width.div_ceil(spacing_x);
        let rows = height.div_ceil(spacing_y);
        let mut tiles = Vec::with_capacity(columns * rows);
        for x in (0..width).step_by(spacing_x) {
            for y in (0..height).step_by(spacing_y) {
                let tile_width = (x + spacing_x).min(width) - x;
                let tile_height = (y + spacing_y).min(height) - y;
                tiles.push(Tile::new(x, y, tile_width, tile_height));
            }
        }

        Ok(Self {
            tiles,
            columns,
            rows,
            image_width: width,
            image_height: height,
        })
    }

    /// All tiles in column-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tile columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of tile rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Width of the partitioned image
    pub const fn image_width(&self) -> usize {
        self.image_width
    }

    /// Height of the partitioned image
    pub const fn image_height(&self) -> usize {
        self.image_height
    }

    /// Tile in grid cell `(column, row)`
    pub fn tile_at(&self, column: usize, row: usize) -> Option<Tile> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.tiles.get(column * self.rows + row).copied()
    }
}
