//! End-to-end solving
//!
//! 1. Run the canny pipeline over the scrambled image
//! 2. Propose and rank spacings for both axes from cut-line scores
//! 3. For every spacing pair, partition, build the tile graph and run the strategy
//! 4. Score each assembly by the summed weights of the links it realizes

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, info_span};

use crate::edge::pipeline::Pipeline;
use crate::graph::adjacency::TileGraph;
use crate::graph::borders::Border;
use crate::io::configuration::{
    CUT_BATCH_FRACTION, MIN_TILE_SIZE, POSSIBLE_CUT_HALO, SolverConfig,
};
use crate::io::error::Result;
use crate::judge::cache::CachingCutJudge;
use crate::judge::chain::EdgeChainJudge;
use crate::judge::cut::EdgeCutJudge;
use crate::judge::spacing::{possible_spacings, rank_spacings, retain_best, thin_out};
use crate::solver::backtrack::ColorCodingStrategy;
use crate::solver::greedy::GreedyStitcher;
use crate::solver::strategy::{SolverStrategy, StrategyKind};
use crate::spatial::assembly::Assembly;
use crate::spatial::grid::{PixelGrid, Raster};
use crate::spatial::tiles::TileLayout;

/// An assembly found for one spacing pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Distance between vertical cuts
    pub spacing_x: usize,
    /// Distance between horizontal cuts
    pub spacing_y: usize,
    /// Summed weight of the links between adjacent placed tiles
    pub score: i64,
    /// The placement
    pub assembly: Assembly,
}

/// Spacings retained for each axis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacingSelection {
    /// Candidate distances between vertical cuts
    pub horizontal: BTreeSet<usize>,
    /// Candidate distances between horizontal cuts
    pub vertical: BTreeSet<usize>,
}

impl SpacingSelection {
    /// Every `(spacing_x, spacing_y)` combination
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        self.horizontal
            .iter()
            .flat_map(|&x| self.vertical.iter().map(move |&y| (x, y)))
            .collect()
    }
}

/// Solver configured once and run on any number of images
#[derive(Debug, Clone)]
pub struct JigsawSolver {
    config: SolverConfig,
}

impl JigsawSolver {
    /// Create a solver
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `config` fails validation
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Edge image of `image`
    ///
    /// # Errors
    ///
    /// Propagates pipeline failures
    pub fn detect_edges<R: Raster + ?Sized>(&self, image: &R) -> Result<PixelGrid> {
        let mut pipeline = Pipeline::canny(&self.config, StdRng::seed_from_u64(self.config.seed))?;
        let edges = pipeline.process(image)?;
        let coherence = EdgeChainJudge::new(&edges).judge();
        info!(
            edge_pixels = edges.count_nonzero(),
            coherence, "edge detection finished"
        );
        Ok(edges)
    }

    /// Spacings worth trying for both axes of `edges`
    pub fn select_spacings<R: Raster + ?Sized>(&self, edges: &R) -> SpacingSelection {
        let width = edges.width();
        let height = edges.height();
        let mut judge = CachingCutJudge::new(EdgeCutJudge::new(edges), width, height);

        let horizontal = rank_spacings(
            &possible_spacings(width, MIN_TILE_SIZE, POSSIBLE_CUT_HALO),
            |spacing| judge.judge_vertical_every(spacing),
        );
        let vertical = rank_spacings(
            &possible_spacings(height, MIN_TILE_SIZE, POSSIBLE_CUT_HALO),
            |spacing| judge.judge_horizontal_every(spacing),
        );
        debug!(
            hits = judge.stats.hits,
            misses = judge.stats.misses,
            "cut judge cache"
        );

        let selection = SpacingSelection {
            horizontal: thin_out(
                &retain_best(&horizontal, CUT_BATCH_FRACTION),
                POSSIBLE_CUT_HALO,
            ),
            vertical: thin_out(
                &retain_best(&vertical, CUT_BATCH_FRACTION),
                POSSIBLE_CUT_HALO,
            ),
        };
        info!(
            horizontal = ?selection.horizontal,
            vertical = ?selection.vertical,
            "selected spacings"
        );
        selection
    }

    /// Strategy named by the configuration
    pub fn strategy(&self) -> Box<dyn SolverStrategy> {
        match self.config.strategy {
            StrategyKind::Greedy => Box::new(GreedyStitcher::new()),
            StrategyKind::ColorCoding => Box::new(ColorCodingStrategy::new(
                StdRng::seed_from_u64(self.config.seed),
                self.config.color_coding_cutoff,
                self.config.solution_cap,
            )),
        }
    }

    /// Assemblies for one spacing pair, scored
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the spacings cannot partition `edges`
    pub fn assemble<R: Raster + ?Sized>(
        &self,
        edges: &R,
        spacing_x: usize,
        spacing_y: usize,
        strategy: &mut dyn SolverStrategy,
    ) -> Result<Vec<Candidate>> {
        let _span = info_span!("assemble", spacing_x, spacing_y).entered();
        let layout = TileLayout::partition(edges.width(), edges.height(), spacing_x, spacing_y)?;
        let graph = TileGraph::build(edges, &layout, self.config.border_tolerance);
        let candidates: Vec<Candidate> = strategy
            .solve(&graph)
            .into_iter()
            .map(|assembly| Candidate {
                spacing_x,
                spacing_y,
                score: score_assembly(&graph, &assembly),
                assembly,
            })
            .collect();
        debug!(
            strategy = strategy.name(),
            found = candidates.len(),
            "strategy finished"
        );
        Ok(candidates)
    }

    /// Solve `image`, best candidate first
    ///
    /// # Errors
    ///
    /// Propagates edge detection and partition failures
    pub fn solve<R: Raster + ?Sized>(&self, image: &R) -> Result<Vec<Candidate>> {
        self.solve_with_progress(image, |_, _| {})
    }

    /// Solve `image`, calling `progress(done, total)` after each spacing pair
    ///
    /// # Errors
    ///
    /// Propagates edge detection and partition failures
    pub fn solve_with_progress<R: Raster + ?Sized>(
        &self,
        image: &R,
        mut progress: impl FnMut(usize, usize),
    ) -> Result<Vec<Candidate>> {
        let edges = self.detect_edges(image)?;
        let pairs = self.select_spacings(&edges).pairs();
        let mut strategy = self.strategy();

        let mut candidates = Vec::new();
        for (done, &(spacing_x, spacing_y)) in pairs.iter().enumerate() {
            candidates.extend(self.assemble(&edges, spacing_x, spacing_y, strategy.as_mut())?);
            progress(done + 1, pairs.len());
        }
        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| (a.spacing_x, a.spacing_y).cmp(&(b.spacing_x, b.spacing_y)))
        });
        info!(candidates = candidates.len(), "solving finished");
        Ok(candidates)
    }
}

/// Summed weights of the links realized between horizontally and vertically adjacent tiles
///
/// Placements without a link contribute nothing.
pub fn score_assembly(graph: &TileGraph, assembly: &Assembly) -> i64 {
    let columns: Vec<Vec<Option<usize>>> = assembly
        .columns()
        .iter()
        .map(|column| column.iter().map(|tile| graph.id_of(tile)).collect())
        .collect();

    let mut score = 0;
    for (x, column) in columns.iter().enumerate() {
        for (y, &tile) in column.iter().enumerate() {
            let Some(tile) = tile else {
                continue;
            };
            let right = columns.get(x + 1).and_then(|next| next.get(y)).copied().flatten();
            let below = column.get(y + 1).copied().flatten();
            if let Some(right) = right {
                score += graph.link_weight(tile, Border::Right, right).unwrap_or(0);
            }
            if let Some(below) = below {
                score += graph.link_weight(tile, Border::Bottom, below).unwrap_or(0);
            }
        }
    }
    score
}
