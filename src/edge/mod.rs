//! Edge detection
//!
//! The canny-style pipeline runs greyscale conversion, Gaussian blur, Sobel
//! gradients, non-maximum suppression and double-threshold hysteresis in order.
//! After it, intensity 0 means "no edge" and every non-zero pixel carries a
//! gradient direction.

/// Gaussian blur step
pub mod blur;
/// Coarse edge directions derived from gradient angles
pub mod direction;
/// Luminosity-weighted greyscale conversion step
pub mod greyscale;
/// Ordered chain of processing steps
pub mod pipeline;
/// Sobel gradient magnitude and direction step
pub mod sobel;
/// Thinning of edges to their local gradient maxima
pub mod suppression;
/// Quantile-based double threshold with hysteresis
pub mod threshold;

pub use direction::EdgeDirection;
pub use pipeline::{Pipeline, Step};
