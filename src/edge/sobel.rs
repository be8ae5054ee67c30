//! Sobel gradient estimation
//!
//! Two unnormalized 3x3 convolutions approximate the gradient along x and y.
//! The magnitude replaces the intensity and the angle becomes the direction.

use std::f64::consts::PI;

use crate::edge::pipeline::Step;
use crate::io::error::Result;
use crate::math::convolution::{Kernel, apply_convolution};
use crate::math::rounding::to_intensity;
use crate::spatial::grid::{PixelGrid, Raster, RasterMut};

const X_WEIGHTS: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const Y_WEIGHTS: [[i32; 3]; 3] = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Gradient magnitude and direction step
#[derive(Debug, Clone)]
pub struct SobelFilter {
    x_kernel: Kernel,
    y_kernel: Kernel,
}

impl SobelFilter {
    /// Build the two gradient kernels
    ///
    /// # Errors
    ///
    /// Propagates kernel construction failures
    pub fn new() -> Result<Self> {
        Ok(Self {
            x_kernel: Kernel::from_rows(&X_WEIGHTS.map(Vec::from))?,
            y_kernel: Kernel::from_rows(&Y_WEIGHTS.map(Vec::from))?,
        })
    }

    /// Gradient direction for the responses `gx` and `gy`
    ///
    /// Undefined when both are zero. Axis-aligned responses map to 0 or π/2,
    /// anything else to `atan2(gy, gx) + π`.
    pub fn gradient_direction(gx: i32, gy: i32) -> Option<f64> {
        match (gx, gy) {
            (0, 0) => None,
            (0, _) => Some(0.0),
            (_, 0) => Some(PI / 2.0),
            _ => Some(f64::from(gy).atan2(f64::from(gx)) + PI),
        }
    }
}

impl Step for SobelFilter {
    fn name(&self) -> &'static str {
        "sobel"
    }

    fn apply(&mut self, grid: &mut PixelGrid) -> Result<()> {
        let mut gradient_x = grid.clone();
        apply_convolution(&self.x_kernel, &mut gradient_x, false)?;
        let mut gradient_y = grid.clone();
        apply_convolution(&self.y_kernel, &mut gradient_y, false)?;

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let gx = gradient_x.intensity(x, y);
                let gy = gradient_y.intensity(x, y);
                grid.set_intensity(x, y, to_intensity(f64::from(gx).hypot(f64::from(gy))));
                grid.set_direction(x, y, Self::gradient_direction(gx, gy));
            }
        }
        Ok(())
    }
}
