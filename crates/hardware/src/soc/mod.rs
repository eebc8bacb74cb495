//! Gateware target components.
//!
//! This module organizes the pieces composed into a target: the platform trait and
//! reference board, the clock and reset generator, the port registry, the peripheral
//! handles, the design description, and the builder that wires them together.

/// Reference board platform and toolchain.
pub mod board;

/// Target composition.
pub mod builder;

/// Clock and power-on reset generator.
pub mod crg;

/// Plain-data design description and Verilog rendering.
pub mod design;

/// Peripheral core handles.
pub mod devices;

/// Port specifier registry.
pub mod ports;

/// Platform and peripheral trait definitions.
pub mod traits;

pub use board::Board;
pub use builder::Target;
pub use ports::PortSpec;
pub use traits::{Platform, Resource};
