//! Peripheral cores instantiated by the target.
//!
//! This module contains the handles for the cores the composition wires together:
//! the I2C peripheral-side controller, the register file behind it, and the FX2
//! host-bridge FIFO arbiter. Their internal logic is provided by the cells named in
//! the hardware description.

/// FX2 host-bridge FIFO arbiter.
pub mod fx2;

/// I2C peripheral-side controller.
pub mod i2c;

/// I2C register file.
pub mod registers;

pub use fx2::{Direction, Fifo, FifoArbiter};
pub use i2c::I2cTarget;
pub use registers::RegisterFile;

pub use crate::soc::traits::Peripheral;
