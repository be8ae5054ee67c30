//! Algorithm constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::solver::strategy::StrategyKind;

// Edge detection
/// Standard deviation of the Gaussian blur
pub const DEFAULT_SIGMA: f64 = 3.0;
/// Lower hysteresis threshold as a fraction of the intensity quantile
pub const DEFAULT_LOWER_FACTOR: f64 = 0.4;
/// Upper hysteresis threshold as a fraction of the intensity quantile
pub const DEFAULT_UPPER_FACTOR: f64 = 0.85;
/// Quantile of pixel intensities the hysteresis factors scale
pub const THRESHOLD_QUANTILE: f64 = 0.9;
/// Centroid budget of the intensity t-digest
pub const DIGEST_SIZE: usize = 100;

// Intensity sampling for large images
/// Images with more pixels than this are sampled instead of read in full
pub const SAMPLING_PIXEL_LIMIT: usize = 100_000;
/// Minimum number of distinct pixels drawn when sampling
pub const MIN_SAMPLE_SIZE: usize = 1000;
/// One pixel in this many is drawn when sampling
pub const SAMPLE_DIVISOR: usize = 1000;

// Cut detection
/// Pixels searched on each side of a cut line for an edge pixel
pub const CUT_HALO: usize = 2;
/// Candidate spacings within this distance of each other collapse into one
pub const POSSIBLE_CUT_HALO: usize = 1;
/// Candidates scoring below this fraction of the best are discarded
pub const CUT_BATCH_FRACTION: f64 = 0.85;
/// Smallest tile side considered when proposing spacings
pub const MIN_TILE_SIZE: usize = 5;

// Graph construction and search
/// Fraction of a border length that may differ between matching borders
pub const BORDER_TOLERANCE: f64 = 0.2;
/// Largest path length the color-coding search attempts
pub const COLOR_CODING_CUTOFF: usize = 10;
/// Largest configurable cutoff; `ceil(e^20)` trials is about 4.9e8
pub const MAX_COLOR_CODING_CUTOFF: usize = 20;
/// Number of completed boards after which backtracking stops
pub const SOLUTION_CAP: usize = 16;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Fixed seed for reproducible sampling and coloring
pub const DEFAULT_SEED: u64 = 42;

/// Runtime parameters of the solver
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Gaussian blur standard deviation
    pub sigma: f64,
    /// Lower hysteresis factor
    pub lower_factor: f64,
    /// Upper hysteresis factor
    pub upper_factor: f64,
    /// Border mismatch tolerance as a fraction of the tile side
    pub border_tolerance: f64,
    /// Longest path the color-coding search attempts
    pub color_coding_cutoff: usize,
    /// Completed boards kept by the backtracking search
    pub solution_cap: usize,
    /// Placement strategy
    pub strategy: StrategyKind,
    /// Seed for all randomized steps
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            lower_factor: DEFAULT_LOWER_FACTOR,
            upper_factor: DEFAULT_UPPER_FACTOR,
            border_tolerance: BORDER_TOLERANCE,
            color_coding_cutoff: COLOR_CODING_CUTOFF,
            solution_cap: SOLUTION_CAP,
            strategy: StrategyKind::Greedy,
            seed: DEFAULT_SEED,
        }
    }
}

impl SolverConfig {
    /// Check every parameter against its admissible range
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first parameter out of range
    pub fn validate(&self) -> Result<()> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(invalid_parameter(
                "sigma",
                &self.sigma,
                &"must be a positive finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.lower_factor) {
            return Err(invalid_parameter(
                "lower_factor",
                &self.lower_factor,
                &"must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.upper_factor) {
            return Err(invalid_parameter(
                "upper_factor",
                &self.upper_factor,
                &"must be in [0, 1]",
            ));
        }
        if self.upper_factor < self.lower_factor {
            return Err(invalid_parameter(
                "upper_factor",
                &self.upper_factor,
                &format!("must not be below lower_factor {}", self.lower_factor),
            ));
        }
        if !(0.0..=1.0).contains(&self.border_tolerance) {
            return Err(invalid_parameter(
                "border_tolerance",
                &self.border_tolerance,
                &"must be in [0, 1]",
            ));
        }
        if self.color_coding_cutoff == 0 || self.color_coding_cutoff > MAX_COLOR_CODING_CUTOFF {
            return Err(invalid_parameter(
                "color_coding_cutoff",
                &self.color_coding_cutoff,
                &format!("must be between 1 and {MAX_COLOR_CODING_CUTOFF}"),
            ));
        }
        if self.solution_cap == 0 {
            return Err(invalid_parameter(
                "solution_cap",
                &self.solution_cap,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}
