//! Reassembly of images whose rectangular tiles were cut apart and shuffled
//!
//! The solver runs an edge detection pipeline over the scrambled image, infers the
//! tile spacing from how often edges are broken along candidate cut lines, builds a
//! directional compatibility graph from tile border signatures and searches that
//! graph for placements that recover the original picture.

#![forbid(unsafe_code)]

/// Edge detection steps and the pipeline that chains them
pub mod edge;
/// Adjacency graph construction from tile border signatures
pub mod graph;
/// Input/output operations, configuration and error handling
pub mod io;
/// Heuristics that score pipeline output and candidate cut lines
pub mod judge;
/// Convolution and rounding
pub mod math;
/// Placement strategies and end-to-end orchestration
pub mod solver;
/// Pixel grids, tiles, assemblies and the views over them
pub mod spatial;

pub use io::error::{JigsawError, Result};
