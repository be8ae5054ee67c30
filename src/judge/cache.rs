//! Memoized whole-line cut scores

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::edge::direction::EdgeDirection;
use crate::judge::cut::CutJudge;

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Scores full horizontal and vertical lines through a cut judge, once per line
///
/// A line is judged on its interior positions, the first and last pixel of the
/// line being excluded.
#[derive(Debug)]
pub struct CachingCutJudge<J> {
    judge: J,
    width: usize,
    height: usize,
    horizontal: HashMap<usize, f64>,
    vertical: HashMap<usize, f64>,
    /// Cache performance statistics
    pub stats: CacheStats,
}

impl<J: CutJudge> CachingCutJudge<J> {
    /// Wrap `judge` for an image of `width` x `height`
    pub fn new(judge: J, width: usize, height: usize) -> Self {
        Self {
            judge,
            width,
            height,
            horizontal: HashMap::new(),
            vertical: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Score of the horizontal cut line along row `y`
    pub fn judge_horizontal(&mut self, y: usize) -> f64 {
        match self.horizontal.entry(y) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let mut positions = (1..self.width.saturating_sub(1)).map(|x| (x, y));
                *entry.insert(self.judge.judge(&mut positions, EdgeDirection::EastWest))
            }
        }
    }

    /// Score of the vertical cut line along column `x`
    pub fn judge_vertical(&mut self, x: usize) -> f64 {
        match self.vertical.entry(x) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                *entry.get()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let mut positions = (1..self.height.saturating_sub(1)).map(|y| (x, y));
                *entry.insert(self.judge.judge(&mut positions, EdgeDirection::NorthSouth))
            }
        }
    }

    /// Mean score of horizontal cuts at every multiple of `spacing` below the last row
    ///
    /// Negative infinity when no such line exists.
    pub fn judge_horizontal_every(&mut self, spacing: usize) -> f64 {
        let limit = self.height.saturating_sub(1);
        self.average_every(spacing, limit, Self::judge_horizontal)
    }

    /// Mean score of vertical cuts at every multiple of `spacing` before the last column
    ///
    /// Negative infinity when no such line exists.
    pub fn judge_vertical_every(&mut self, spacing: usize) -> f64 {
        let limit = self.width.saturating_sub(1);
        self.average_every(spacing, limit, Self::judge_vertical)
    }

    fn average_every(
        &mut self,
        spacing: usize,
        limit: usize,
        line: fn(&mut Self, usize) -> f64,
    ) -> f64 {
        if spacing == 0 {
            return f64::NEG_INFINITY;
        }
        let mut sum = 0.0;
        let mut lines = 0usize;
        let mut position = spacing;
        while position < limit {
            sum += line(self, position);
            lines += 1;
            position += spacing;
        }
        if lines == 0 {
            f64::NEG_INFINITY
        } else {
            sum / lines as f64
        }
    }
}
