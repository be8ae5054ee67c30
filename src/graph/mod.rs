//! Tile compatibility graph
//!
//! Each tile border is reduced to a bit signature of its edge pixels. Tiles whose
//! opposing borders have similar signatures are linked in both directions, with
//! a weight that shrinks as the signatures drift apart.

/// Directed neighbour sets and the graph builder
pub mod adjacency;
/// Bit signatures of tile borders
pub mod bitset;
/// Border enumeration and signature extraction
pub mod borders;

pub use adjacency::{Neighbor, TileGraph, TileId};
pub use borders::Border;
