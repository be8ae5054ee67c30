use clap::ValueEnum;

use crate::graph::adjacency::TileGraph;
use crate::spatial::assembly::Assembly;

/// Turns a tile graph into candidate assemblies
pub trait SolverStrategy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Every assembly the strategy finds, possibly none
    fn solve(&mut self, graph: &TileGraph) -> Vec<Assembly>;
}

/// Strategy selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum StrategyKind {
    /// Greedy stitching from every free corner
    #[default]
    Greedy,
    /// Color-coding anchors followed by backtracking
    ColorCoding,
}
