//! Gaussian smoothing

use std::f64::consts::PI;

use crate::edge::pipeline::Step;
use crate::io::error::{Result, invalid_parameter};
use crate::math::convolution::{Kernel, apply_convolution};
use crate::spatial::grid::PixelGrid;

/// Normalized convolution with a sampled Gaussian
#[derive(Debug, Clone)]
pub struct GaussianBlur {
    sigma: f64,
    kernel: Kernel,
}

impl GaussianBlur {
    /// Precompute the kernel for standard deviation `sigma`
    ///
    /// The side is `ceil(6 * sigma)`, bumped to the next odd number.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `sigma` is positive and finite
    pub fn new(sigma: f64) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(invalid_parameter(
                "sigma",
                &sigma,
                &"must be a positive finite number",
            ));
        }

        let mut side = (6.0 * sigma).ceil() as usize;
        if side % 2 == 0 {
            side += 1;
        }
        let variance = sigma * sigma;
        let kernel = Kernel::from_offsets(side, |dx, dy| {
            let distance = (dx * dx + dy * dy) as f64;
            (-distance / (2.0 * variance)).exp() / (2.0 * PI * variance)
        })?;
        Ok(Self { sigma, kernel })
    }

    /// Standard deviation
    pub const fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The precomputed kernel
    pub const fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl Step for GaussianBlur {
    fn name(&self) -> &'static str {
        "gaussian-blur"
    }

    fn apply(&mut self, grid: &mut PixelGrid) -> Result<()> {
        apply_convolution(&self.kernel, grid, true)
    }
}
