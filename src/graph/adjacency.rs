//! Directed neighbour sets between tiles
//!
//! `neighbors(t, Border::Top)` holds the tiles that may sit directly above `t`.
//! Links are always inserted in pairs: if `p` may sit above `t`, then `t` may sit
//! below `p` with the same weight.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::borders::{Border, BorderFeatures, PerBorder, extract_features};
use crate::math::rounding::round_half_up;
use crate::spatial::grid::Raster;
use crate::spatial::tiles::{Tile, TileLayout};

/// Index of a tile in its graph
pub type TileId = usize;

/// A candidate neighbour and the weight of the link to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbor {
    /// Neighbouring tile
    pub tile: TileId,
    /// Link weight
    pub weight: i64,
}

/// Neighbours ordered by ascending weight, then by tile id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencySet {
    entries: Vec<Neighbor>,
}

impl AdjacencySet {
    /// Insert or replace the link to `neighbor.tile`
    pub fn insert(&mut self, neighbor: Neighbor) {
        self.entries.retain(|entry| entry.tile != neighbor.tile);
        let position = self
            .entries
            .partition_point(|entry| (entry.weight, entry.tile) < (neighbor.weight, neighbor.tile));
        self.entries.insert(position, neighbor);
    }

    /// The first entry in weight order
    pub fn first(&self) -> Option<&Neighbor> {
        self.entries.first()
    }

    /// Entries in weight order
    pub fn iter(&self) -> impl Iterator<Item = &Neighbor> {
        self.entries.iter()
    }

    /// Weight of the link to `tile`
    pub fn weight_of(&self, tile: TileId) -> Option<i64> {
        self.entries
            .iter()
            .find(|entry| entry.tile == tile)
            .map(|entry| entry.weight)
    }

    /// Whether `tile` is a neighbour
    pub fn contains(&self, tile: TileId) -> bool {
        self.weight_of(tile).is_some()
    }

    /// Number of neighbours
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no neighbours
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every neighbour
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A tile with its border signatures and neighbour sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileInfo {
    tile: Tile,
    features: BorderFeatures,
    neighbors: PerBorder<AdjacencySet>,
}

impl TileInfo {
    /// Source rectangle
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Border signatures
    pub const fn features(&self) -> &BorderFeatures {
        &self.features
    }

    /// Candidate neighbours on `border`
    pub const fn neighbors(&self, border: Border) -> &AdjacencySet {
        self.neighbors.get(border)
    }
}

/// Compatibility graph over the tiles of one layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGraph {
    vertices: Vec<TileInfo>,
    ids: HashMap<Tile, TileId>,
    columns: usize,
    rows: usize,
    image_width: usize,
    image_height: usize,
}

impl TileGraph {
    /// Graph over the tiles of `layout` without any links
    pub fn unlinked<R: Raster + ?Sized>(edge_image: &R, layout: &TileLayout) -> Self {
        let vertices: Vec<TileInfo> = layout
            .tiles()
            .iter()
            .map(|&tile| TileInfo {
                tile,
                features: extract_features(&tile.view(edge_image)),
                neighbors: PerBorder::default(),
            })
            .collect();
        let ids = vertices
            .iter()
            .enumerate()
            .map(|(id, info)| (info.tile, id))
            .collect();
        Self {
            vertices,
            ids,
            columns: layout.columns(),
            rows: layout.rows(),
            image_width: layout.image_width(),
            image_height: layout.image_height(),
        }
    }

    /// Build the graph for `layout` over `edge_image`
    ///
    /// Two borders match when their signatures differ in at most
    /// `round(side * tolerance)` bits, `side` being the tile extent along the border.
    pub fn build<R: Raster + ?Sized>(edge_image: &R, layout: &TileLayout, tolerance: f64) -> Self {
        let mut graph = Self::unlinked(edge_image, layout);
        let tile_width = layout.tiles().first().map_or(0, Tile::width);
        let tile_height = layout.tiles().first().map_or(0, Tile::height);
        let horizontal_delta = round_half_up(tile_width as f64 * tolerance) as usize;
        let vertical_delta = round_half_up(tile_height as f64 * tolerance) as usize;

        let mut by_cardinality: HashMap<(Border, usize), Vec<TileId>> = HashMap::new();
        for (id, info) in graph.vertices.iter().enumerate() {
            for border in Border::ALL {
                let cardinality = info.features.get(border).count();
                by_cardinality.entry((border, cardinality)).or_default().push(id);
            }
        }

        for id in 0..graph.vertices.len() {
            graph.link_matches(id, Border::Top, horizontal_delta, &by_cardinality);
            graph.link_matches(id, Border::Left, vertical_delta, &by_cardinality);
        }
        debug!(
            tiles = graph.len(),
            links = graph.link_count(),
            "built tile graph"
        );
        graph
    }

    fn link_matches(
        &mut self,
        id: TileId,
        border: Border,
        max_delta: usize,
        by_cardinality: &HashMap<(Border, usize), Vec<TileId>>,
    ) {
        let Some(own) = self.vertices.get(id).map(|info| info.features.get(border).clone()) else {
            return;
        };
        let cardinality = own.count() as i64;
        let max_delta = max_delta as i64;
        let mut visited = vec![false; self.vertices.len()];
        if let Some(slot) = visited.get_mut(id) {
            *slot = true;
        }

        let mut matches = Vec::new();
        for magnitude in 0..=max_delta {
            let deltas = if magnitude == 0 {
                vec![0]
            } else {
                vec![magnitude, -magnitude]
            };
            for delta in deltas {
                let Ok(target) = usize::try_from(cardinality + delta) else {
                    continue;
                };
                let Some(candidates) = by_cardinality.get(&(border.opposite(), target)) else {
                    continue;
                };
                for &candidate in candidates {
                    let Some(slot) = visited.get_mut(candidate) else {
                        continue;
                    };
                    if *slot {
                        continue;
                    }
                    *slot = true;
                    let Some(info) = self.vertices.get(candidate) else {
                        continue;
                    };
                    let difference = info.features.get(border.opposite()).xor_count(&own) as i64;
                    if difference <= max_delta {
                        matches.push((candidate, max_delta - (cardinality - delta).abs()));
                    }
                }
            }
        }

        for (candidate, weight) in matches {
            self.link(id, border, candidate, weight);
        }
    }

    /// Record that `other` may sit on `border` of `tile`, and the reverse
    pub fn link(&mut self, tile: TileId, border: Border, other: TileId, weight: i64) {
        if tile >= self.vertices.len() || other >= self.vertices.len() {
            return;
        }
        if let Some(info) = self.vertices.get_mut(tile) {
            info.neighbors
                .get_mut(border)
                .insert(Neighbor { tile: other, weight });
        }
        if let Some(info) = self.vertices.get_mut(other) {
            info.neighbors
                .get_mut(border.opposite())
                .insert(Neighbor { tile, weight });
        }
    }

    /// Drop every candidate on `border` of `tile`
    pub fn clear_neighbors(&mut self, tile: TileId, border: Border) {
        if let Some(info) = self.vertices.get_mut(tile) {
            info.neighbors.get_mut(border).clear();
        }
    }

    /// Candidates on `border` of `tile`
    pub fn neighbors(&self, tile: TileId, border: Border) -> Option<&AdjacencySet> {
        self.vertices.get(tile).map(|info| info.neighbors(border))
    }

    /// First candidate on `border` of `tile`
    pub fn best_neighbor(&self, tile: TileId, border: Border) -> Option<TileId> {
        self.neighbors(tile, border)
            .and_then(AdjacencySet::first)
            .map(|neighbor| neighbor.tile)
    }

    /// Weight of the link placing `other` on `border` of `tile`
    pub fn link_weight(&self, tile: TileId, border: Border, other: TileId) -> Option<i64> {
        self.neighbors(tile, border)
            .and_then(|set| set.weight_of(other))
    }

    /// Successor lists along `border`, one per tile
    pub fn successor_lists(&self, border: Border) -> Vec<Vec<TileId>> {
        self.vertices
            .iter()
            .map(|info| info.neighbors(border).iter().map(|n| n.tile).collect())
            .collect()
    }

    /// Vertex for `tile`
    pub fn vertex(&self, tile: TileId) -> Option<&TileInfo> {
        self.vertices.get(tile)
    }

    /// Source rectangle of `tile`
    pub fn tile(&self, tile: TileId) -> Option<Tile> {
        self.vertex(tile).map(TileInfo::tile)
    }

    /// Id of the vertex holding `tile`
    pub fn id_of(&self, tile: &Tile) -> Option<TileId> {
        self.ids.get(tile).copied()
    }

    /// All vertices in id order
    pub fn vertices(&self) -> &[TileInfo] {
        &self.vertices
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no tiles
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of directed link entries across all borders
    pub fn link_count(&self) -> usize {
        self.vertices
            .iter()
            .map(|info| Border::ALL.iter().map(|&b| info.neighbors(b).len()).sum::<usize>())
            .sum()
    }

    /// Tile columns of the layout
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Tile rows of the layout
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Width of the source image
    pub const fn image_width(&self) -> usize {
        self.image_width
    }

    /// Height of the source image
    pub const fn image_height(&self) -> usize {
        self.image_height
    }
}
