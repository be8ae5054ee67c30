//! Numerical building blocks for the edge pipeline

/// Clamped-border 2-D convolution with square kernels
pub mod convolution;
/// Rounding rules shared by every integer-producing step
pub mod rounding;
