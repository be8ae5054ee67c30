//! Non-maximum suppression

use tracing::{debug, info};

use crate::edge::direction::EdgeDirection;
use crate::edge::pipeline::Step;
use crate::io::error::Result;
use crate::spatial::grid::{PixelGrid, Raster, RasterMut};

/// Clears pixels that are weaker than a neighbour across their edge
#[derive(Debug, Clone, Copy, Default)]
pub struct NonMaximumSuppression;

impl Step for NonMaximumSuppression {
    fn name(&self) -> &'static str {
        "non-maximum-suppression"
    }

    fn apply(&mut self, grid: &mut PixelGrid) -> Result<()> {
        info!(
            width = grid.width(),
            height = grid.height(),
            "thinning edges"
        );
        let source = grid.clone();
        let mut cleaned = 0usize;

        for y in 0..source.height() {
            for x in 0..source.width() {
                let Some(direction) = EdgeDirection::classify(source.direction(x, y)) else {
                    continue;
                };
                let own = source.intensity(x, y);
                let weaker = direction.across_offsets().iter().any(|&(dx, dy)| {
                    own < source.clamped_intensity(x as i64 + dx, y as i64 + dy)
                });
                if weaker {
                    grid.set_intensity(x, y, 0);
                    grid.set_direction(x, y, None);
                    cleaned += 1;
                }
            }
        }

        debug!(cleaned, "suppressed non-maximum pixels");
        Ok(())
    }
}
