//! Color coding for simple paths
//!
//! Every trial colors the vertices with `k` random colors and looks for paths on
//! which all colors differ, growing sets of used colors one vertex per round. A
//! colorful path is simple, and a fixed simple path of `k` vertices turns out
//! colorful with probability `k! / k^k`, so `ceil(e^k)` trials find it with
//! constant probability.

use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use crate::io::configuration::MAX_COLOR_CODING_CUTOFF;

/// Vertices starting a simple path of `k` vertices in a directed graph
#[derive(Debug, Clone)]
pub struct ColorCoding {
    predecessors: Vec<Vec<usize>>,
    cutoff: usize,
}

/// Partial paths ending at one vertex as `(color mask, start vertex)`
type Frontier = HashSet<(u64, usize)>;

impl ColorCoding {
    /// Prepare a search over `successors`, where `successors[v]` lists the edges leaving `v`
    ///
    /// Paths longer than `cutoff` vertices are never searched; the cutoff is capped
    /// at the width of the color masks. Edges to unknown vertices are ignored.
    pub fn new(successors: &[Vec<usize>], cutoff: usize) -> Self {
        let mut predecessors = vec![Vec::new(); successors.len()];
        for (from, targets) in successors.iter().enumerate() {
            for &to in targets {
                if let Some(list) = predecessors.get_mut(to) {
                    list.push(from);
                }
            }
        }
        Self {
            predecessors,
            cutoff: cutoff.min(MAX_COLOR_CODING_CUTOFF),
        }
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.predecessors.len()
    }

    /// Trials run for paths of `k` vertices
    pub fn trial_count(k: usize) -> u64 {
        (k as f64).exp().ceil() as u64
    }

    /// Start vertices of colorful paths of `k` vertices found over all trials
    ///
    /// Empty when `k` is 0 or exceeds the cutoff. May miss starts with small
    /// probability; never reports a vertex that does not start a simple path.
    pub fn find_path_starts<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> BTreeSet<usize> {
        if k == 0 || k > self.cutoff {
            debug!(k, cutoff = self.cutoff, "path length outside color coding range");
            return BTreeSet::new();
        }

        let trials = Self::trial_count(k);
        let mut starts = BTreeSet::new();
        for _ in 0..trials {
            let colors: Vec<usize> = (0..self.vertex_count())
                .map(|_| rng.random_range(0..k))
                .collect();
            starts.extend(self.colorful_starts(k, &colors));
        }
        debug!(k, trials, found = starts.len(), "color coding finished");
        starts
    }

    /// Starts of paths of `k` vertices that are colorful under `colors`
    pub fn colorful_starts(&self, k: usize, colors: &[usize]) -> BTreeSet<usize> {
        let color_bit = |vertex: usize| colors.get(vertex).map_or(0, |&color| 1u64 << color);
        let vertices = self.vertex_count();
        if k == 1 {
            return (0..vertices).collect();
        }

        let mut frontier: Vec<Frontier> = (0..vertices)
            .map(|vertex| Frontier::from([(color_bit(vertex), vertex)]))
            .collect();

        for length in 2..=k {
            let previous = &frontier;
            let extended: Vec<Frontier> = (0..vertices)
                .into_par_iter()
                .map(|vertex| {
                    let bit = color_bit(vertex);
                    let mut grown = Frontier::new();
                    let sources = self.predecessors.get(vertex).map_or(&[][..], Vec::as_slice);
                    for &from in sources {
                        let Some(paths) = previous.get(from) else {
                            continue;
                        };
                        for &(mask, start) in paths {
                            if mask & bit == 0 {
                                grown.insert((mask | bit, start));
                            }
                        }
                    }
                    grown
                })
                .collect();

            if length == k {
                return extended
                    .into_iter()
                    .flat_map(|paths| paths.into_iter().map(|(_, start)| start))
                    .collect();
            }
            frontier = extended;
        }
        BTreeSet::new()
    }
}
