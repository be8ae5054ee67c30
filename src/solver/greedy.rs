//! Corner-seeded greedy stitching
//!
//! Links whose best candidate does not pick the tile back are pruned first. A tile
//! with no candidates on two adjacent borders is taken to be a corner of the
//! picture. From that corner the stitcher fills its row and column with the best
//! unused neighbours, then steps diagonally inwards choosing the tile that agrees
//! best with both of its already placed neighbours, and repeats.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::graph::adjacency::{TileGraph, TileId};
use crate::graph::borders::Border;
use crate::solver::board::Board;
use crate::solver::strategy::SolverStrategy;
use crate::spatial::assembly::Assembly;

/// A start tile and the board corner it sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartHypothesis {
    /// Tile placed first
    pub tile: TileId,
    /// Board column
    pub x: usize,
    /// Board row
    pub y: usize,
    /// Column step towards the interior
    pub step_x: isize,
    /// Row step towards the interior
    pub step_y: isize,
}

/// Greedy placement from every corner candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStitcher;

impl GreedyStitcher {
    /// Create the strategy
    pub const fn new() -> Self {
        Self
    }
}

impl SolverStrategy for GreedyStitcher {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&mut self, graph: &TileGraph) -> Vec<Assembly> {
        let mut pruned = graph.clone();
        prune_unconfirmed(&mut pruned);

        let hypotheses = corner_hypotheses(&pruned);
        if hypotheses.is_empty() {
            warn!("no tile qualifies as a corner");
        }

        let mut assemblies: Vec<Assembly> = Vec::new();
        for hypothesis in hypotheses {
            let (board, weak) = stitch(&pruned, hypothesis);
            debug!(
                tile = hypothesis.tile,
                x = hypothesis.x,
                y = hypothesis.y,
                weak_cells = weak,
                "stitched board"
            );
            if let Some(assembly) = board.to_assembly(graph) {
                if !assemblies.contains(&assembly) {
                    assemblies.push(assembly);
                }
            }
        }
        assemblies
    }
}

/// Clear every neighbour set whose best candidate does not reciprocate
///
/// The set on `border` of tile `t` is cleared when its first entry `o` does not
/// have `t` first on the opposite border. Decisions are made against the graph as
/// it was before any clearing.
pub fn prune_unconfirmed(graph: &mut TileGraph) {
    let mut unconfirmed = Vec::new();
    for tile in 0..graph.len() {
        for border in Border::ALL {
            let Some(best) = graph.best_neighbor(tile, border) else {
                continue;
            };
            if graph.best_neighbor(best, border.opposite()) != Some(tile) {
                unconfirmed.push((tile, border));
            }
        }
    }
    debug!(cleared = unconfirmed.len(), "pruned unconfirmed links");
    for (tile, border) in unconfirmed {
        graph.clear_neighbors(tile, border);
    }
}

/// Tiles with no candidates on two adjacent borders, at their corner
///
/// Ordered top-left, bottom-left, top-right, bottom-right; by tile id within a corner.
pub fn corner_hypotheses(graph: &TileGraph) -> Vec<StartHypothesis> {
    let last_x = graph.columns().saturating_sub(1);
    let last_y = graph.rows().saturating_sub(1);
    let corners = [
        (Border::Left, Border::Top, 0, 0, 1, 1),
        (Border::Left, Border::Bottom, 0, last_y, 1, -1),
        (Border::Right, Border::Top, last_x, 0, -1, 1),
        (Border::Right, Border::Bottom, last_x, last_y, -1, -1),
    ];

    let is_free = |tile: TileId, border: Border| {
        graph
            .neighbors(tile, border)
            .is_none_or(|set| set.is_empty())
    };

    let mut hypotheses = Vec::new();
    for (horizontal, vertical, x, y, step_x, step_y) in corners {
        for tile in 0..graph.len() {
            if is_free(tile, horizontal) && is_free(tile, vertical) {
                hypotheses.push(StartHypothesis {
                    tile,
                    x,
                    y,
                    step_x,
                    step_y,
                });
            }
        }
    }
    hypotheses
}

/// Stitch a board from `start`; returns it with the number of cells filled as fallback
pub fn stitch(graph: &TileGraph, start: StartHypothesis) -> (Board, usize) {
    let mut stitcher = Stitcher {
        graph,
        board: Board::new(graph.columns(), graph.rows()),
        visited: HashSet::new(),
        row_border: if start.step_x > 0 {
            Border::Right
        } else {
            Border::Left
        },
        column_border: if start.step_y > 0 {
            Border::Bottom
        } else {
            Border::Top
        },
        step_x: start.step_x,
        step_y: start.step_y,
    };
    stitcher.place(start.x, start.y, start.tile);

    let (mut x, mut y) = (start.x, start.y);
    loop {
        stitcher.extend(x, y, start.step_x, 0, stitcher.row_border);
        stitcher.extend(x, y, 0, start.step_y, stitcher.column_border);
        let Some((next_x, next_y)) = stitcher.offset(x, y, start.step_x, start.step_y) else {
            break;
        };
        if stitcher.board.get(next_x, next_y).is_some() {
            break;
        }
        let Some(tile) = stitcher.diagonal_candidate(next_x, next_y) else {
            break;
        };
        stitcher.place(next_x, next_y, tile);
        x = next_x;
        y = next_y;
    }

    let weak = stitcher.fill_remaining();
    (stitcher.board, weak)
}

struct Stitcher<'a> {
    graph: &'a TileGraph,
    board: Board,
    visited: HashSet<TileId>,
    row_border: Border,
    column_border: Border,
    step_x: isize,
    step_y: isize,
}

impl Stitcher<'_> {
    fn place(&mut self, x: usize, y: usize, tile: TileId) {
        self.board.set(x, y, Some(tile));
        self.visited.insert(tile);
    }

    fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.board.contains(nx, ny).then_some((nx, ny))
    }

    fn best_unvisited(&self, tile: TileId, border: Border) -> Option<TileId> {
        self.graph
            .neighbors(tile, border)?
            .iter()
            .map(|neighbor| neighbor.tile)
            .find(|candidate| !self.visited.contains(candidate))
    }

    /// Walk from `(x, y)` by `(dx, dy)` placing the best unused neighbour on `border`
    fn extend(&mut self, x: usize, y: usize, dx: isize, dy: isize, border: Border) {
        let Some(mut current) = self.board.get(x, y) else {
            return;
        };
        let (mut cx, mut cy) = (x, y);
        while let Some((nx, ny)) = self.offset(cx, cy, dx, dy) {
            if self.board.get(nx, ny).is_some() {
                break;
            }
            let Some(next) = self.best_unvisited(current, border) else {
                break;
            };
            self.place(nx, ny, next);
            current = next;
            cx = nx;
            cy = ny;
        }
    }

    /// Unused tile for `(x, y)` with the highest summed weight to its placed neighbours
    ///
    /// The neighbour in the same row sits one step back along x, the one in the same
    /// column one step back along y. Ties go to the lowest tile id.
    fn diagonal_candidate(&self, x: usize, y: usize) -> Option<TileId> {
        let row_neighbor = self
            .offset(x, y, -self.step_x, 0)
            .and_then(|(nx, ny)| self.board.get(nx, ny));
        let column_neighbor = self
            .offset(x, y, 0, -self.step_y)
            .and_then(|(nx, ny)| self.board.get(nx, ny));

        let mut scores: Vec<(TileId, i64)> = Vec::new();
        let sources = [
            (row_neighbor, self.row_border),
            (column_neighbor, self.column_border),
        ];
        for (neighbor, border) in sources {
            let Some(set) = neighbor.and_then(|tile| self.graph.neighbors(tile, border)) else {
                continue;
            };
            for candidate in set.iter() {
                if self.visited.contains(&candidate.tile) {
                    continue;
                }
                match scores.iter_mut().find(|(tile, _)| *tile == candidate.tile) {
                    Some((_, score)) => *score += candidate.weight,
                    None => scores.push((candidate.tile, candidate.weight)),
                }
            }
        }

        scores
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(tile, _)| tile)
    }

    /// Fill empty cells with unused tiles in id order; returns how many were filled
    fn fill_remaining(&mut self) -> usize {
        let mut unused = (0..self.graph.len()).filter(|tile| !self.visited.contains(tile));
        let mut filled = Vec::new();
        for (x, y) in self.board.empty_cells() {
            let Some(tile) = unused.next() else {
                break;
            };
            filled.push((x, y, tile));
        }
        for &(x, y, tile) in &filled {
            self.place(x, y, tile);
        }
        filled.len()
    }
}
