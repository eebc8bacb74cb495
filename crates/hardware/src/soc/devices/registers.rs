//! I2C-accessible register file.
//!
//! Register decoding happens in the `i2c_registers` cell, which sits behind the
//! I2C target and consumes its transaction nets. The composition only decides
//! whether it exists and how many registers it has.

use crate::soc::devices::i2c::I2cTarget;
use crate::soc::traits::Peripheral;

/// Register file hanging off the I2C target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    count: usize,
    address: u8,
    /// Instance name of the controller feeding this file.
    upstream: String,
}

impl RegisterFile {
    /// Creates a register file of `count` registers behind `i2c`.
    pub fn new(i2c: &I2cTarget, count: usize) -> Self {
        Self {
            count,
            address: i2c.address(),
            upstream: i2c.name().to_owned(),
        }
    }

    /// Number of registers.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Address of the I2C target this file is reached through.
    pub const fn address(&self) -> u8 {
        self.address
    }
}

impl Peripheral for RegisterFile {
    fn name(&self) -> &str {
        "registers"
    }

    fn cell(&self) -> &str {
        "i2c_registers"
    }

    fn parameters(&self) -> Vec<(&'static str, u64)> {
        vec![("REG_COUNT", self.count as u64)]
    }

    fn upstream(&self) -> Option<&str> {
        Some(&self.upstream)
    }
}
