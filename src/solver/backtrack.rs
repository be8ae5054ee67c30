//! Backtracking placement seeded by color-coding anchors
//!
//! Anchors are the tiles that start a simple rightward path as long as the board
//! is wide, which makes them candidates for the first column. Cells are filled
//! column by column, top to bottom, from the intersection of the candidates
//! offered by the tile above and the tile to the left.

use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use tracing::{debug, warn};

use crate::graph::adjacency::{TileGraph, TileId};
use crate::graph::borders::Border;
use crate::solver::board::Board;
use crate::solver::color_coding::ColorCoding;
use crate::solver::strategy::SolverStrategy;
use crate::spatial::assembly::Assembly;

/// Color coding followed by exhaustive backtracking
#[derive(Debug, Clone)]
pub struct ColorCodingStrategy<R> {
    rng: R,
    cutoff: usize,
    solution_cap: usize,
}

impl<R: Rng> ColorCodingStrategy<R> {
    /// Create the strategy; `rng` colors the vertices
    pub const fn new(rng: R, cutoff: usize, solution_cap: usize) -> Self {
        Self {
            rng,
            cutoff,
            solution_cap,
        }
    }
}

impl<R: Rng> SolverStrategy for ColorCodingStrategy<R> {
    fn name(&self) -> &'static str {
        "color-coding"
    }

    fn solve(&mut self, graph: &TileGraph) -> Vec<Assembly> {
        let coding = ColorCoding::new(&graph.successor_lists(Border::Right), self.cutoff);
        let anchors = coding.find_path_starts(graph.columns(), &mut self.rng);
        if anchors.len() < graph.rows() {
            warn!(
                anchors = anchors.len(),
                rows = graph.rows(),
                "too few anchors to fill the first column"
            );
            return Vec::new();
        }

        let mut assemblies: Vec<Assembly> = Vec::new();
        for board in complete_boards(graph, &anchors, self.solution_cap) {
            if let Some(assembly) = board.to_assembly(graph) {
                if !assemblies.contains(&assembly) {
                    assemblies.push(assembly);
                }
            }
        }
        assemblies
    }
}

/// Complete boards whose first column uses only `anchors`, at most `cap` of them
///
/// The search keeps an explicit stack of remaining candidates per filled cell.
pub fn complete_boards(graph: &TileGraph, anchors: &BTreeSet<TileId>, cap: usize) -> Vec<Board> {
    let columns = graph.columns();
    let rows = graph.rows();
    let cells: Vec<(usize, usize)> = (0..columns)
        .flat_map(|x| (0..rows).map(move |y| (x, y)))
        .collect();
    let Some(&first) = cells.first() else {
        return Vec::new();
    };

    let mut board = Board::new(columns, rows);
    let mut used: HashSet<TileId> = HashSet::new();
    let mut solutions = Vec::new();
    let mut stack = vec![candidates(graph, &board, &used, anchors, first)];

    while let Some(depth) = stack.len().checked_sub(1) {
        let Some(&(x, y)) = cells.get(depth) else {
            break;
        };
        if let Some(previous) = board.get(x, y) {
            used.remove(&previous);
            board.set(x, y, None);
        }

        let Some(tile) = stack.last_mut().and_then(Vec::pop) else {
            stack.pop();
            continue;
        };
        board.set(x, y, Some(tile));
        used.insert(tile);

        match cells.get(depth + 1) {
            Some(&next) => {
                let next_candidates = candidates(graph, &board, &used, anchors, next);
                stack.push(next_candidates);
            }
            None => {
                solutions.push(board.clone());
                if solutions.len() >= cap {
                    break;
                }
            }
        }
    }

    debug!(solutions = solutions.len(), "backtracking finished");
    solutions
}

/// Unused tiles that fit cell `(x, y)`, highest id first so that popping yields ascending ids
fn candidates(
    graph: &TileGraph,
    board: &Board,
    used: &HashSet<TileId>,
    anchors: &BTreeSet<TileId>,
    (x, y): (usize, usize),
) -> Vec<TileId> {
    let offered = |neighbor: Option<TileId>, border: Border| -> Option<BTreeSet<TileId>> {
        let set = graph.neighbors(neighbor?, border)?;
        Some(set.iter().map(|entry| entry.tile).collect())
    };

    let above = y
        .checked_sub(1)
        .map(|row| offered(board.get(x, row), Border::Bottom).unwrap_or_default());
    let left = x
        .checked_sub(1)
        .map(|column| offered(board.get(column, y), Border::Right).unwrap_or_default());

    let mut fitting: BTreeSet<TileId> = match (above, left) {
        (Some(above), Some(left)) => above.intersection(&left).copied().collect(),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => anchors.clone(),
    };
    if x == 0 {
        fitting.retain(|tile| anchors.contains(tile));
    }
    fitting.retain(|tile| !used.contains(tile));
    fitting.into_iter().rev().collect()
}
