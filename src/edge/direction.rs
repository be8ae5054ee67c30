//! Coarse edge directions
//!
//! A represented gradient angle is the angle of the gradient vector, which is
//! perpendicular to the edge it describes: a purely horizontal gradient (radian 0)
//! belongs to a north-south edge.

use std::f64::consts::PI;

/// One of four edge orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeDirection {
    /// Vertical edge, gradient angle 0
    NorthSouth,
    /// Horizontal edge, gradient angle π/2
    EastWest,
    /// Edge rising to the right, gradient angle 3π/4
    NortheastSouthwest,
    /// Edge falling to the right, gradient angle π/4
    SoutheastNorthwest,
}

/// Angles this close above π are still read on the half turn
const HALF_TURN_TOLERANCE: f64 = 1e-4;

impl EdgeDirection {
    /// All four directions
    pub const ALL: [Self; 4] = [
        Self::NorthSouth,
        Self::EastWest,
        Self::NortheastSouthwest,
        Self::SoutheastNorthwest,
    ];

    /// Representative gradient angle in radians
    pub const fn gradient_radian(self) -> f64 {
        match self {
            Self::NorthSouth => 0.0,
            Self::EastWest => PI / 2.0,
            Self::NortheastSouthwest => 3.0 * PI / 4.0,
            Self::SoutheastNorthwest => PI / 4.0,
        }
    }

    /// Bucket a gradient angle in `[0, 2π]` into its direction
    ///
    /// The angle is normalized to half turns; values beyond one half turn are
    /// halved so that `[0, 2π]` folds onto `[0, 1]`. Returns `None` for
    /// non-finite input.
    pub fn from_gradient_radian(radian: f64) -> Option<Self> {
        if !radian.is_finite() {
            return None;
        }
        let mut normalized = radian / PI;
        if normalized > 1.0 + HALF_TURN_TOLERANCE {
            normalized /= 2.0;
        }

        Some(if normalized <= 1.0 / 8.0 || normalized >= 7.0 / 8.0 {
            Self::NorthSouth
        } else if normalized <= 3.0 / 8.0 {
            Self::SoutheastNorthwest
        } else if normalized >= 5.0 / 8.0 {
            Self::NortheastSouthwest
        } else {
            Self::EastWest
        })
    }

    /// Bucket an optional direction, keeping `None` as undefined
    pub fn classify(direction: Option<f64>) -> Option<Self> {
        direction.and_then(Self::from_gradient_radian)
    }

    /// Pixel step that walks along an edge of this direction
    pub const fn chain_step(self) -> (i64, i64) {
        match self {
            Self::EastWest => (1, 0),
            Self::NorthSouth => (0, 1),
            Self::NortheastSouthwest => (1, -1),
            Self::SoutheastNorthwest => (1, 1),
        }
    }

    /// Offsets of the two neighbours across an edge of this direction
    pub const fn across_offsets(self) -> [(i64, i64); 2] {
        match self {
            Self::NorthSouth => [(-1, 0), (1, 0)],
            Self::EastWest => [(0, -1), (0, 1)],
            Self::NortheastSouthwest => [(-1, -1), (1, 1)],
            Self::SoutheastNorthwest => [(1, -1), (-1, 1)],
        }
    }
}
