//! Common types and constants used throughout the target library.
//!
//! This module provides the building blocks shared by the composition and the build flow:
//! 1. **Constants:** Resource names, fixed wiring values, and artifact layout.
//! 2. **Error Handling:** Platform, build, and target error types.

/// Resource names and fixed configuration values.
pub mod constants;

/// Error types for platform, build, and target operations.
pub mod error;

pub use error::{BuildError, PlatformError, TargetError};
