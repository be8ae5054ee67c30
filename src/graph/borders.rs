//! Tile borders and their edge signatures

use crate::edge::direction::EdgeDirection;
use crate::graph::bitset::BorderBitset;
use crate::spatial::grid::Raster;

/// One side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Border {
    /// First row
    Top,
    /// Last row
    Bottom,
    /// First column
    Left,
    /// Last column
    Right,
}

impl Border {
    /// All four borders
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The border facing this one on an adjacent tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Edges running along this border, which carry no information across it
    pub const fn parallel_direction(self) -> EdgeDirection {
        match self {
            Self::Top | Self::Bottom => EdgeDirection::EastWest,
            Self::Left | Self::Right => EdgeDirection::NorthSouth,
        }
    }

    /// Pixel coordinates of this border on a `width` x `height` tile, in bit order
    const fn pixel(self, index: usize, width: usize, height: usize) -> (usize, usize) {
        match self {
            Self::Top => (index, 0),
            Self::Bottom => (index, height.saturating_sub(1)),
            Self::Left => (0, index),
            Self::Right => (width.saturating_sub(1), index),
        }
    }

    const fn length(self, width: usize, height: usize) -> usize {
        match self {
            Self::Top | Self::Bottom => width,
            Self::Left | Self::Right => height,
        }
    }
}

/// Signature of one border of `view`
///
/// A bit is set where the pixel is an edge whose direction is not parallel to the
/// border. Pixels with an undefined direction count as crossing edges.
pub fn extract_border<R: Raster + ?Sized>(view: &R, border: Border) -> BorderBitset {
    let width = view.width();
    let height = view.height();
    let length = border.length(width, height);
    let mut bits = BorderBitset::new(length);
    for index in 0..length {
        let (x, y) = border.pixel(index, width, height);
        let crossing =
            EdgeDirection::classify(view.direction(x, y)) != Some(border.parallel_direction());
        if view.intensity(x, y) != 0 && crossing {
            bits.insert(index);
        }
    }
    bits
}

/// One value per border
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerBorder<T> {
    top: T,
    bottom: T,
    left: T,
    right: T,
}

impl<T> PerBorder<T> {
    /// Build each value from its border
    pub fn from_fn(mut value: impl FnMut(Border) -> T) -> Self {
        Self {
            top: value(Border::Top),
            bottom: value(Border::Bottom),
            left: value(Border::Left),
            right: value(Border::Right),
        }
    }

    /// Value of `border`
    pub const fn get(&self, border: Border) -> &T {
        match border {
            Border::Top => &self.top,
            Border::Bottom => &self.bottom,
            Border::Left => &self.left,
            Border::Right => &self.right,
        }
    }

    /// Mutable value of `border`
    pub const fn get_mut(&mut self, border: Border) -> &mut T {
        match border {
            Border::Top => &mut self.top,
            Border::Bottom => &mut self.bottom,
            Border::Left => &mut self.left,
            Border::Right => &mut self.right,
        }
    }
}

/// Signatures of all four borders of a tile
pub type BorderFeatures = PerBorder<BorderBitset>;

/// Extract the signatures of every border of `view`
pub fn extract_features<R: Raster + ?Sized>(view: &R) -> BorderFeatures {
    PerBorder::from_fn(|border| extract_border(view, border))
}
