//! Global Target Constants.
//!
//! This module defines the fixed values shared across the target composition and build flow. It includes:
//! 1. **Resource Names:** The platform resources requested during composition.
//! 2. **Wiring Constants:** Values the reference configuration ties peripherals to.
//! 3. **Build Constants:** Artifact layout and temporary directory naming.

/// Name of the clock input resource (buffered into the always-on domain).
pub const RES_CLK_IF: &str = "clk_if";

/// Name of the I2C bus resource shared with the host-side microcontroller.
pub const RES_I2C: &str = "i2c";

/// Name of the host-bridge (FX2 slave FIFO) bus resource.
pub const RES_FX2: &str = "fx2";

/// Name of the sync strobe resource.
pub const RES_SYNC: &str = "sync";

/// Name of the generic I/O bank resource. Requested once per port.
pub const RES_IO: &str = "io";

/// 7-bit I2C address the peripheral-side controller answers on.
pub const I2C_ADDRESS: u8 = 0b0001000;

/// Highest address representable on a 7-bit I2C bus.
pub const I2C_ADDRESS_MAX: u8 = 0x7F;

/// Initial value of the power-on reset counter, in always-on clock cycles.
pub const RESET_DELAY: u32 = 2047;

/// Default queue depth of every host-bridge FIFO.
pub const FIFO_DEPTH: usize = 511;

/// Name of the top-level module in the hardware description.
pub const TOP_NAME: &str = "top";

/// File name of the bitstream the toolchain leaves in the build directory.
pub const BITSTREAM_FILE: &str = "top.bin";

/// Prefix of temporary build directories created when the caller supplies none.
pub const BUILD_DIR_PREFIX: &str = "glasgow_";
