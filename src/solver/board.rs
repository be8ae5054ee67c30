//! Grid of tile ids under construction

use ndarray::Array2;

use crate::graph::adjacency::{TileGraph, TileId};
use crate::spatial::assembly::Assembly;

/// Placement grid addressed by `(column, row)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Option<TileId>>,
}

impl Board {
    /// Empty board of `columns` x `rows`
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, columns), None),
        }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile in cell `(x, y)`
    pub fn get(&self, x: usize, y: usize) -> Option<TileId> {
        self.cells.get((y, x)).copied().flatten()
    }

    /// Put `tile` into cell `(x, y)`, or clear it with `None`
    pub fn set(&mut self, x: usize, y: usize, tile: Option<TileId>) {
        if let Some(cell) = self.cells.get_mut((y, x)) {
            *cell = tile;
        }
    }

    /// Whether `(x, y)` is a cell of the board
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.columns() && y < self.rows()
    }

    /// Whether every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cells in column-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..self.columns())
            .flat_map(|x| (0..self.rows()).map(move |y| (x, y)))
            .filter(|&(x, y)| self.get(x, y).is_none())
            .collect()
    }

    /// Convert into an assembly over the image of `graph`
    ///
    /// Cell `(x, y)` is placed at `(x * w, y * h)` where `w` x `h` is the size of the
    /// tile in cell `(0, 0)`. Returns `None` unless the board is complete.
    pub fn to_assembly(&self, graph: &TileGraph) -> Option<Assembly> {
        if !self.is_complete() {
            return None;
        }
        let corner = graph.tile(self.get(0, 0)?)?;
        let mut assembly = Assembly::new(graph.image_width(), graph.image_height());
        for x in 0..self.columns() {
            for y in 0..self.rows() {
                let tile = graph.tile(self.get(x, y)?)?;
                assembly.place(x * corner.width(), y * corner.height(), tile);
            }
        }
        Some(assembly)
    }
}
