//! # Build Flow Tests


/// Toolchain discovery and process execution.
pub mod toolchain;
