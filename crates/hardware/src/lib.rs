//! Gateware target library for a USB-attached iCE40 FPGA adapter.
//!
//! This crate composes the adapter's gateware target and manages its bitstream builds:
//! 1. **Clocking:** Power-on reset sequencer gating the system clock domain.
//! 2. **Composition:** I2C target, register file, FX2 FIFO arbiter and I/O banks wired into one target.
//! 3. **Ports:** Symbolic port specifiers (`"A"`, `"B"`) resolved to banks and FIFOs.
//! 4. **Build:** Toolchain invocation with scoped build-directory cleanup.
//! 5. **Configuration:** Construction parameters with the reference defaults.

/// Build flow (toolchain invocation, build lifecycle).
pub mod build;
/// Common types and constants (errors, resource names, artifact layout).
pub mod common;
/// Target configuration (defaults, JSON loading, validation).
pub mod config;
/// Target components (board, CRG, ports, peripherals, design, builder).
pub mod soc;

/// Options for a bitstream build; use `BuildOptions::default()` for a temporary directory.
pub use crate::build::BuildOptions;
/// Error type returned by target operations.
pub use crate::common::TargetError;
/// Construction parameters; use `TargetConfig::default()` for the reference configuration.
pub use crate::config::TargetConfig;
/// Reference board platform.
pub use crate::soc::Board;
/// Composed target; construct with `Target::new`.
pub use crate::soc::Target;
