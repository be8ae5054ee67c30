//! Double threshold with hysteresis
//!
//! Both thresholds are fractions of a high quantile of the intensity distribution.
//! Pixels below the lower one are cleared, pixels at or above the upper one are kept
//! and pixels in between survive only next to a strong pixel.

use std::collections::HashSet;

use rand::Rng;
use tdigest::TDigest;
use tracing::debug;

use crate::edge::pipeline::Step;
use crate::io::configuration::{
    DIGEST_SIZE, MIN_SAMPLE_SIZE, SAMPLE_DIVISOR, SAMPLING_PIXEL_LIMIT, THRESHOLD_QUANTILE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::math::rounding::to_intensity;
use crate::spatial::grid::{PixelGrid, Raster, RasterMut};

/// Hysteresis thresholding step
#[derive(Debug, Clone)]
pub struct DoubleThreshold<R> {
    lower_factor: f64,
    upper_factor: f64,
    rng: R,
}

impl<R: Rng> DoubleThreshold<R> {
    /// Create the step; `rng` drives pixel sampling on large images
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 <= lower_factor <= upper_factor <= 1`
    pub fn new(lower_factor: f64, upper_factor: f64, rng: R) -> Result<Self> {
        if !(0.0..=1.0).contains(&lower_factor) {
            return Err(invalid_parameter(
                "lower_factor",
                &lower_factor,
                &"must be in [0, 1]",
            ));
        }
        if !(lower_factor..=1.0).contains(&upper_factor) {
            return Err(invalid_parameter(
                "upper_factor",
                &upper_factor,
                &"must be in [lower_factor, 1]",
            ));
        }
        Ok(Self {
            lower_factor,
            upper_factor,
            rng,
        })
    }

    /// Lower and upper thresholds for `grid`, `None` for an empty grid
    pub fn thresholds(&mut self, grid: &PixelGrid) -> Option<(i32, i32)> {
        let quantile = self.intensity_quantile(grid)?;
        Some((
            to_intensity(quantile * self.lower_factor),
            to_intensity(quantile * self.upper_factor),
        ))
    }

    fn intensity_quantile(&mut self, grid: &PixelGrid) -> Option<f64> {
        let width = grid.width();
        let height = grid.height();
        let total = width * height;
        if total == 0 {
            return None;
        }

        let values = if total > SAMPLING_PIXEL_LIMIT {
            let target = MIN_SAMPLE_SIZE.max(total / SAMPLE_DIVISOR);
            let mut sampled = HashSet::with_capacity(target);
            let mut values = Vec::with_capacity(target);
            while sampled.len() < target {
                let position = (
                    self.rng.random_range(0..width),
                    self.rng.random_range(0..height),
                );
                if sampled.insert(position) {
                    values.push(f64::from(grid.intensity(position.0, position.1)));
                }
            }
            debug!(sampled = values.len(), total, "sampled intensities");
            values
        } else {
            grid.intensities().iter().map(|&value| f64::from(value)).collect()
        };

        let digest = TDigest::new_with_size(DIGEST_SIZE).merge_unsorted(values);
        Some(digest.estimate_quantile(THRESHOLD_QUANTILE))
    }
}

impl<R: Rng> Step for DoubleThreshold<R> {
    fn name(&self) -> &'static str {
        "double-threshold"
    }

    fn apply(&mut self, grid: &mut PixelGrid) -> Result<()> {
        let Some((lower, upper)) = self.thresholds(grid) else {
            return Ok(());
        };
        debug!(lower, upper, "hysteresis thresholds");

        let source = grid.clone();
        for y in 0..source.height() {
            for x in 0..source.width() {
                let value = source.intensity(x, y);
                let keep = if value < lower {
                    false
                } else if value < upper {
                    has_strong_neighbour(&source, x, y, upper)
                } else {
                    true
                };
                if !keep {
                    grid.set_intensity(x, y, 0);
                    grid.set_direction(x, y, None);
                }
            }
        }
        Ok(())
    }
}

fn has_strong_neighbour(source: &PixelGrid, x: usize, y: usize, upper: i32) -> bool {
    (-1..=1).any(|dx| {
        (-1..=1).any(|dy| source.clamped_intensity(x as i64 + dx, y as i64 + dy) >= upper)
    })
}
