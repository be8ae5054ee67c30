//! Placement search and orchestration

/// Exhaustive column-by-column placement seeded by color coding
pub mod backtrack;
/// Board of tile ids and its conversion into assemblies
pub mod board;
/// Randomized detection of vertices starting simple paths of a given length
pub mod color_coding;
/// End-to-end solver from scrambled image to ranked assemblies
pub mod executor;
/// Corner-seeded greedy stitching
pub mod greedy;
/// Common interface of placement strategies
pub mod strategy;
