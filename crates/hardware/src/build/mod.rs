//! Bitstream build flow.
//!
//! This module drives the external synthesis toolchain. It provides:
//! 1. **Toolchain:** Program discovery and checked process execution.
//! 2. **Lifecycle:** Build-directory ownership and the cleanup policy around a build.

/// Build sessions and the cleanup policy.
pub mod lifecycle;

/// External toolchain invocation.
pub mod toolchain;

pub use lifecycle::{BuildOptions, produce_bitstream};
