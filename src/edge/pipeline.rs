//! Ordered composition of processing steps over an owned grid

use rand::Rng;
use tracing::{debug, info_span};

use crate::edge::blur::GaussianBlur;
use crate::edge::greyscale::Greyscale;
use crate::edge::sobel::SobelFilter;
use crate::edge::suppression::NonMaximumSuppression;
use crate::edge::threshold::DoubleThreshold;
use crate::io::configuration::SolverConfig;
use crate::io::error::Result;
use crate::spatial::grid::{PixelGrid, Raster};

/// A transformation applied to a grid in place
pub trait Step {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Transform `grid`
    ///
    /// # Errors
    ///
    /// Returns an error if the step cannot be computed on this grid
    fn apply(&mut self, grid: &mut PixelGrid) -> Result<()>;
}

/// Steps run in insertion order on a copy of the input
#[derive(Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Step>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// The canny edge detector configured by `config`
    ///
    /// Runs greyscale, Gaussian blur, Sobel, non-maximum suppression and double
    /// threshold in that order; `rng` drives intensity sampling.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the blur or threshold parameters are out of range
    pub fn canny<R: Rng + 'static>(config: &SolverConfig, rng: R) -> Result<Self> {
        Ok(Self::new()
            .with_step(Greyscale)
            .with_step(GaussianBlur::new(config.sigma)?)
            .with_step(SobelFilter::new()?)
            .with_step(NonMaximumSuppression)
            .with_step(DoubleThreshold::new(
                config.lower_factor,
                config.upper_factor,
                rng,
            )?))
    }

    /// Append a step
    #[must_use]
    pub fn with_step(mut self, step: impl Step + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Append a boxed step
    pub fn push(&mut self, step: Box<dyn Step>) {
        self.steps.push(step);
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the steps in order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }

    /// Run every step over a deep copy of `input`
    ///
    /// # Errors
    ///
    /// Propagates the first step failure
    pub fn process<R: Raster + ?Sized>(&mut self, input: &R) -> Result<PixelGrid> {
        let mut grid = input.to_grid();
        for step in &mut self.steps {
            let _span = info_span!("step", name = step.name()).entered();
            step.apply(&mut grid)?;
            debug!(nonzero = grid.count_nonzero(), "step finished");
        }
        Ok(grid)
    }
}
