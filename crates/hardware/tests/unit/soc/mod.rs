//! # SoC Component Tests

/// Reference board resources.
pub mod board;


/// Power-on reset sequencing.
pub mod crg;
