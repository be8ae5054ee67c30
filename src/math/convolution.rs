//! Square-kernel convolution with clamped image borders

use ndarray::Array2;
use num_traits::ToPrimitive;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

use crate::io::error::{JigsawError, Result, computation_error};
use crate::math::rounding::to_intensity;
use crate::spatial::grid::{PixelGrid, Raster};

/// Square matrix of weights with an odd side length
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Build a kernel from nested rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if the rows do not form a square with an odd side,
    /// or `Computation` if a weight has no `f64` representation
    pub fn from_rows<T: ToPrimitive>(rows: &[Vec<T>]) -> Result<Self> {
        let side = rows.len();
        if side % 2 == 0 {
            return Err(JigsawError::InvalidKernel {
                rows: side,
                columns: rows.first().map_or(0, Vec::len),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != side) {
            return Err(JigsawError::InvalidKernel {
                rows: side,
                columns: row.len(),
            });
        }

        let mut weights = Array2::zeros((side, side));
        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                let weight = value
                    .to_f64()
                    .ok_or_else(|| computation_error("kernel", &"weight is not representable"))?;
                if let Some(cell) = weights.get_mut((i, j)) {
                    *cell = weight;
                }
            }
        }
        Ok(Self { weights })
    }

    /// Build a kernel of side `side` from a function of the offset `(dx, dy)` to the center
    ///
    /// # Errors
    ///
    /// Returns `InvalidKernel` if `side` is even
    pub fn from_offsets(side: usize, weight: impl Fn(i64, i64) -> f64) -> Result<Self> {
        if side % 2 == 0 {
            return Err(JigsawError::InvalidKernel {
                rows: side,
                columns: side,
            });
        }
        let radius = (side / 2) as i64;
        let weights = Array2::from_shape_fn((side, side), |(i, j)| {
            weight(i as i64 - radius, j as i64 - radius)
        });
        Ok(Self { weights })
    }

    /// Side length
    pub fn side(&self) -> usize {
        self.weights.nrows()
    }

    /// Distance from the center to an edge
    pub fn radius(&self) -> usize {
        self.side() / 2
    }

    /// Weight at row `i`, column `j`
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights.get((i, j)).copied().unwrap_or(0.0)
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.weights.sum()
    }
}

/// Convolve the intensities of `grid` with `kernel` in place
///
/// Each output pixel is `sum over (dx, dy) of input(x + dx, y + dy) * kernel[c - dx][c - dy]`
/// with `c` the kernel radius and input coordinates clamped into the grid. All reads
/// see the unmodified input. With `normalize` the sum is divided by the kernel's
/// total weight (skipped when that total is zero). Results are rounded half up.
///
/// # Errors
///
/// Returns `Computation` if the output cannot be reshaped into the grid
pub fn apply_convolution(kernel: &Kernel, grid: &mut PixelGrid, normalize: bool) -> Result<()> {
    let width = grid.width();
    let height = grid.height();
    let radius = kernel.radius() as i64;
    let divisor = if normalize && kernel.sum() != 0.0 {
        kernel.sum()
    } else {
        1.0
    };

    let source = &*grid;
    let output: Vec<i32> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).map(move |x| {
                let mut total = 0.0;
                for dx in -radius..=radius {
                    for dy in -radius..=radius {
                        let value = source.clamped_intensity(x as i64 + dx, y as i64 + dy);
                        let weight = kernel.weight((radius - dx) as usize, (radius - dy) as usize);
                        total += f64::from(value) * weight;
                    }
                }
                to_intensity(total / divisor)
            })
        })
        .collect();

    let intensities = Array2::from_shape_vec((height, width), output)
        .map_err(|error| computation_error("convolution", &error))?;
    grid.replace_intensities(intensities);
    Ok(())
}
