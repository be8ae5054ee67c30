//! Placement of tiles onto a target image
//!
//! An assembly maps target origins to tiles through two nested ordered maps: the
//! outer keyed by x origin, the inner by y origin. Looking up a target pixel takes
//! the greatest x origin not above it and then the greatest y origin not above it.

use std::collections::BTreeMap;

use crate::spatial::grid::{Raster, RasterMut};
use crate::spatial::tiles::Tile;

/// Tiles placed at target origins
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assembly {
    width: usize,
    height: usize,
    placements: BTreeMap<usize, BTreeMap<usize, Tile>>,
}

impl Assembly {
    /// Create an empty assembly covering a `width` x `height` target
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            placements: BTreeMap::new(),
        }
    }

    /// Place `tile` with its top-left corner at target `(x, y)`
    pub fn place(&mut self, x: usize, y: usize, tile: Tile) {
        self.placements.entry(x).or_default().insert(y, tile);
    }

    /// Target width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Target height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.placements.values().map(BTreeMap::len).sum()
    }

    /// Whether no tile has been placed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Placed tiles as `(x origin, y origin, tile)`, ordered by x then y
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.placements
            .iter()
            .flat_map(|(&x, column)| column.iter().map(move |(&y, &tile)| (x, y, tile)))
    }

    /// Placed tiles grouped into columns of the placement grid
    pub fn columns(&self) -> Vec<Vec<Tile>> {
        self.placements
            .values()
            .map(|column| column.values().copied().collect())
            .collect()
    }

    /// Tile covering target `(x, y)` and the tile-local coordinates of that pixel
    pub fn locate(&self, x: usize, y: usize) -> Option<(Tile, usize, usize)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let (&origin_x, column) = self.placements.range(..=x).next_back()?;
        let (&origin_y, &tile) = column.range(..=y).next_back()?;
        Some((tile, x - origin_x, y - origin_y))
    }

    /// Read view of `raster` rearranged by this assembly
    pub const fn view<'a, R: Raster + ?Sized>(&'a self, raster: &'a R) -> AssemblyView<'a, R> {
        AssemblyView {
            assembly: self,
            raster,
        }
    }

    /// Read/write view of `raster` rearranged by this assembly
    pub const fn view_mut<'a, R: RasterMut + ?Sized>(
        &'a self,
        raster: &'a mut R,
    ) -> AssemblyViewMut<'a, R> {
        AssemblyViewMut {
            assembly: self,
            raster,
        }
    }
}

/// Source image read through an assembly
#[derive(Debug)]
pub struct AssemblyView<'a, R: ?Sized> {
    assembly: &'a Assembly,
    raster: &'a R,
}

impl<R: Raster + ?Sized> Raster for AssemblyView<'_, R> {
    fn width(&self) -> usize {
        self.assembly.width
    }

    fn height(&self) -> usize {
        self.assembly.height
    }

    fn intensity(&self, x: usize, y: usize) -> i32 {
        self.assembly
            .locate(x, y)
            .map_or(0, |(tile, lx, ly)| tile.view(self.raster).intensity(lx, ly))
    }

    fn direction(&self, x: usize, y: usize) -> Option<f64> {
        self.assembly
            .locate(x, y)
            .and_then(|(tile, lx, ly)| tile.view(self.raster).direction(lx, ly))
    }
}

/// Source image read and written through an assembly
#[derive(Debug)]
pub struct AssemblyViewMut<'a, R: ?Sized> {
    assembly: &'a Assembly,
    raster: &'a mut R,
}

impl<R: Raster + ?Sized> Raster for AssemblyViewMut<'_, R> {
    fn width(&self) -> usize {
        self.assembly.width
    }

    fn height(&self) -> usize {
        self.assembly.height
    }

    fn intensity(&self, x: usize, y: usize) -> i32 {
        self.assembly
            .locate(x, y)
            .map_or(0, |(tile, lx, ly)| tile.view(&*self.raster).intensity(lx, ly))
    }

    fn direction(&self, x: usize, y: usize) -> Option<f64> {
        self.assembly
            .locate(x, y)
            .and_then(|(tile, lx, ly)| tile.view(&*self.raster).direction(lx, ly))
    }
}

impl<R: RasterMut + ?Sized> RasterMut for AssemblyViewMut<'_, R> {
    fn set_intensity(&mut self, x: usize, y: usize, value: i32) {
        if let Some((tile, lx, ly)) = self.assembly.locate(x, y) {
            tile.view_mut(&mut *self.raster).set_intensity(lx, ly, value);
        }
    }

    fn set_direction(&mut self, x: usize, y: usize, direction: Option<f64>) {
        if let Some((tile, lx, ly)) = self.assembly.locate(x, y) {
            tile.view_mut(&mut *self.raster).set_direction(lx, ly, direction);
        }
    }
}
