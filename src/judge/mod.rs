//! Scoring heuristics
//!
//! - Edge-chain judge rates how coherent a pipeline output is
//! - Cut judges rate how likely a line is to be a tile boundary
//! - Spacing selection turns cut scores into candidate tile sizes

/// Memoizing decorator for whole-line cut scores
pub mod cache;
/// Average edge-chain length over an edge image
pub mod chain;
/// Continuity of edges across a candidate cut line
pub mod cut;
/// Candidate spacing proposal, ranking and thinning
pub mod spacing;
