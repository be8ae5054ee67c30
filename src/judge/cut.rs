//! Edge continuity across a candidate cut line
//!
//! For each position on the line the nearest edge pixel within the halo is looked
//! up on both sides. An edge that reaches the line from only one side, or whose
//! direction changes across it, is broken by the cut. Matching directions on both
//! sides mean the edge runs straight through, unless the edge runs along the cut.

use crate::edge::direction::EdgeDirection;
use crate::io::configuration::CUT_HALO;
use crate::spatial::grid::Raster;

/// Scores a set of positions forming a cut line
pub trait CutJudge {
    /// Score in `[-1, 1]`, positive when the line likely is a tile boundary
    ///
    /// `cut_direction` is the orientation of the line: `EastWest` for a horizontal
    /// cut, `NorthSouth` for a vertical one.
    fn judge(
        &self,
        positions: &mut dyn Iterator<Item = (usize, usize)>,
        cut_direction: EdgeDirection,
    ) -> f64;
}

/// Cut judge reading an edge image
#[derive(Debug)]
pub struct EdgeCutJudge<'a, R: ?Sized> {
    image: &'a R,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Ignored,
    Valid,
    Broken,
}

impl<'a, R: Raster + ?Sized> EdgeCutJudge<'a, R> {
    /// Judge cuts through `image`
    pub const fn new(image: &'a R) -> Self {
        Self { image }
    }

    /// Image dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.image.width(), self.image.height())
    }

    fn verdict(&self, x: usize, y: usize, cut_direction: EdgeDirection) -> Verdict {
        let before = self.halo_hit(x, y, cut_direction, -1);
        let after = self.halo_hit(x, y, cut_direction, 1);
        match (before, after) {
            (None, None) => Verdict::Ignored,
            (Some(_), None) | (None, Some(_)) => Verdict::Broken,
            (Some(first), Some(second)) => {
                let first = EdgeDirection::classify(self.image.direction(first.0, first.1));
                let second = EdgeDirection::classify(self.image.direction(second.0, second.1));
                match (first, second) {
                    (Some(a), Some(b)) if a == b && a == cut_direction => Verdict::Ignored,
                    (Some(a), Some(b)) if a == b => Verdict::Valid,
                    _ => Verdict::Broken,
                }
            }
        }
    }

    /// First edge pixel at distance `1..=CUT_HALO` on one side of the line
    fn halo_hit(
        &self,
        x: usize,
        y: usize,
        cut_direction: EdgeDirection,
        side: i64,
    ) -> Option<(usize, usize)> {
        let (step_x, step_y) = match cut_direction {
            EdgeDirection::EastWest => (0, side),
            EdgeDirection::NorthSouth => (side, 0),
            EdgeDirection::NortheastSouthwest | EdgeDirection::SoutheastNorthwest => return None,
        };
        (1..=CUT_HALO as i64).find_map(|delta| {
            let hx = usize::try_from(x as i64 + step_x * delta).ok()?;
            let hy = usize::try_from(y as i64 + step_y * delta).ok()?;
            (self.image.contains(hx, hy) && self.image.intensity(hx, hy) != 0).then_some((hx, hy))
        })
    }
}

impl<R: Raster + ?Sized> CutJudge for EdgeCutJudge<'_, R> {
    fn judge(
        &self,
        positions: &mut dyn Iterator<Item = (usize, usize)>,
        cut_direction: EdgeDirection,
    ) -> f64 {
        let mut broken = 0usize;
        let mut valid = 0usize;
        for (x, y) in positions {
            match self.verdict(x, y, cut_direction) {
                Verdict::Broken => broken += 1,
                Verdict::Valid => valid += 1,
                Verdict::Ignored => {}
            }
        }

        let signal = broken + valid;
        if signal == 0 {
            0.0
        } else {
            (broken as f64 - valid as f64) / signal as f64
        }
    }
}
