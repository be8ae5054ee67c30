use crate::edge::pipeline::Step;
use crate::io::error::Result;
use crate::math::rounding::to_intensity;
use crate::spatial::grid::{PixelGrid, Raster, RasterMut, unpack_rgb};

/// Replaces packed `0xRRGGBB` intensities with their luminosity
#[derive(Debug, Clone, Copy, Default)]
pub struct Greyscale;

impl Greyscale {
    /// Luminosity of one packed color
    pub fn luminosity(rgb: i32) -> i32 {
        let [red, green, blue] = unpack_rgb(rgb);
        to_intensity(0.0722f64.mul_add(
            f64::from(blue),
            0.2126f64.mul_add(f64::from(red), 0.7152 * f64::from(green)),
        ))
    }
}

impl Step for Greyscale {
    fn name(&self) -> &'static str {
        "greyscale"
    }

    fn apply(&mut self, grid: &mut PixelGrid) -> Result<()> {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let value = Self::luminosity(grid.intensity(x, y));
                grid.set_intensity(x, y, value);
            }
        }
        Ok(())
    }
}
