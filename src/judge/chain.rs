//! Edge-chain length judge
//!
//! Chains are walked from their first encountered pixel along the step vector of
//! that pixel's direction. One pixel of a different direction may be jumped over;
//! a second one in a row, a zero pixel or leaving the grid ends the chain.

use tracing::debug;

use crate::edge::direction::EdgeDirection;
use crate::spatial::grid::Raster;

/// Average number of pixels per discovered edge chain
///
/// The value is `width * height / chains` and is computed once per judge.
#[derive(Debug)]
pub struct EdgeChainJudge<'a, R: ?Sized> {
    image: &'a R,
    result: Option<f64>,
    chains: usize,
}

impl<'a, R: Raster + ?Sized> EdgeChainJudge<'a, R> {
    /// Judge `image`
    pub const fn new(image: &'a R) -> Self {
        Self {
            image,
            result: None,
            chains: 0,
        }
    }

    /// Score of the image, 0 when it has no edge pixels
    pub fn judge(&mut self) -> f64 {
        if let Some(result) = self.result {
            return result;
        }

        self.chains = self.count_chains();
        let area = (self.image.width() * self.image.height()) as f64;
        let result = if self.chains == 0 {
            0.0
        } else {
            area / self.chains as f64
        };
        debug!(chains = self.chains, result, "judged edge chains");
        self.result = Some(result);
        result
    }

    /// Number of chains found by the last [`Self::judge`] call
    pub const fn chain_count(&self) -> usize {
        self.chains
    }

    fn count_chains(&self) -> usize {
        let width = self.image.width();
        let height = self.image.height();
        let mut tagged = vec![false; width * height];
        let mut chains = 0;

        for x in 0..width {
            for y in 0..height {
                let seen = tagged.get(x * height + y).copied().unwrap_or(true);
                if seen || self.image.intensity(x, y) == 0 {
                    continue;
                }
                chains += 1;
                self.follow_chain(x, y, &mut tagged);
            }
        }
        chains
    }

    fn follow_chain(&self, start_x: usize, start_y: usize, tagged: &mut [bool]) {
        let height = self.image.height();
        let mut tag = |x: usize, y: usize| {
            if let Some(cell) = tagged.get_mut(x * height + y) {
                *cell = true;
            }
        };

        // A pixel without direction has no walk and forms a chain on its own
        let Some(direction) = EdgeDirection::classify(self.image.direction(start_x, start_y))
        else {
            tag(start_x, start_y);
            return;
        };

        let (step_x, step_y) = direction.chain_step();
        let (mut x, mut y) = (start_x as i64, start_y as i64);
        let mut jumped = false;
        while let (Ok(ux), Ok(uy)) = (usize::try_from(x), usize::try_from(y)) {
            if !self.image.contains(ux, uy) || self.image.intensity(ux, uy) == 0 {
                break;
            }
            if EdgeDirection::classify(self.image.direction(ux, uy)) == Some(direction) {
                jumped = false;
                tag(ux, uy);
            } else if jumped {
                break;
            } else {
                jumped = true;
            }
            x += step_x;
            y += step_y;
        }
    }
}
