//! Command-line interface solving one scrambled image into an output file

use crate::io::configuration::{
    BORDER_TOLERANCE, DEFAULT_LOWER_FACTOR, DEFAULT_SEED, DEFAULT_SIGMA, DEFAULT_UPPER_FACTOR,
    SolverConfig,
};
use crate::io::error::Result;
use crate::io::image::{load_grid, save_grid};
use crate::io::progress::ProgressReporter;
use crate::solver::executor::JigsawSolver;
use crate::solver::strategy::StrategyKind;
use crate::spatial::grid::Raster;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "jigsolve")]
#[command(
    author,
    version,
    about = "Reassemble an image whose rectangular tiles were shuffled"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Scrambled input image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where the reassembled image is written
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Standard deviation of the Gaussian blur
    #[arg(long, default_value_t = DEFAULT_SIGMA)]
    pub sigma: f64,

    /// Lower hysteresis factor
    #[arg(long, default_value_t = DEFAULT_LOWER_FACTOR)]
    pub lower: f64,

    /// Upper hysteresis factor
    #[arg(long, default_value_t = DEFAULT_UPPER_FACTOR)]
    pub upper: f64,

    /// Fraction of a border length that may differ between matching borders
    #[arg(long, default_value_t = BORDER_TOLERANCE)]
    pub tolerance: f64,

    /// Placement strategy
    #[arg(long, value_enum, default_value_t = StrategyKind::Greedy)]
    pub strategy: StrategyKind,

    /// Random seed for reproducible sampling and coloring
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Solver configuration from the parsed arguments
    pub fn to_config(&self) -> SolverConfig {
        SolverConfig {
            sigma: self.sigma,
            lower_factor: self.lower,
            upper_factor: self.upper,
            border_tolerance: self.tolerance,
            strategy: self.strategy,
            seed: self.seed,
            ..SolverConfig::default()
        }
    }
}

/// Result of processing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The best assembly was written to the output path
    Written {
        /// Distance between vertical cuts
        spacing_x: usize,
        /// Distance between horizontal cuts
        spacing_y: usize,
        /// Score of the written assembly
        score: i64,
    },
    /// No assembly was found and nothing was written
    NoAssembly,
}

/// Loads the input, solves it and writes the best assembly
pub struct FileProcessor {
    cli: Cli,
    progress: Option<ProgressReporter>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressReporter::new);
        Self { cli, progress }
    }

    /// Solve the input image and write the result
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The arguments form an invalid configuration
    /// - The input cannot be loaded
    /// - The output cannot be written
    pub fn process(&mut self) -> Result<ProcessOutcome> {
        let solver = JigsawSolver::new(self.cli.to_config())?;
        let image = load_grid(&self.cli.input)?;
        info!(
            path = %self.cli.input.display(),
            width = image.width(),
            height = image.height(),
            "loaded input"
        );

        if let Some(ref progress) = self.progress {
            progress.start(&self.cli.input);
        }
        let candidates = solver.solve_with_progress(&image, |done, total| {
            if let Some(ref progress) = self.progress {
                progress.update(done, total);
            }
        })?;

        let Some(best) = candidates.first() else {
            if let Some(ref progress) = self.progress {
                progress.finish("no assembly found");
            }
            warn!("no assembly found, nothing written");
            return Ok(ProcessOutcome::NoAssembly);
        };

        save_grid(&best.assembly.view(&image), &self.cli.output)?;
        if let Some(ref progress) = self.progress {
            progress.finish("done");
        }
        info!(
            path = %self.cli.output.display(),
            spacing_x = best.spacing_x,
            spacing_y = best.spacing_y,
            score = best.score,
            "wrote assembly"
        );

        Ok(ProcessOutcome::Written {
            spacing_x: best.spacing_x,
            spacing_y: best.spacing_y,
            score: best.score,
        })
    }
}
