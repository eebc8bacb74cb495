//! Configuration for the gateware target.
//!
//! This module defines the construction parameters of a [`Target`](crate::soc::Target). It provides:
//! 1. **Defaults:** The reference configuration (FIFO depth, I2C address, reset delay).
//! 2. **Structure:** A flat, serde-deserializable config with per-field defaults.
//! 3. **Validation:** Range checks that the collaborators do not perform themselves.
//!
//! Configuration is supplied as JSON (e.g. from the CLI `--config` flag) or built with
//! `TargetConfig::new` and the `with_*` setters.

use serde::Deserialize;

use crate::common::TargetError;
use crate::common::constants;

/// Default values applied when a field is omitted.
mod defaults {
    use crate::common::constants;

    /// No OUT FIFOs unless requested.
    pub const OUT_COUNT: usize = 0;

    /// No IN FIFOs unless requested.
    pub const IN_COUNT: usize = 0;

    /// Queue depth of every arbiter FIFO.
    pub const FIFO_DEPTH: usize = constants::FIFO_DEPTH;

    /// No register file unless requested.
    pub const REG_COUNT: usize = 0;

    /// Address of the I2C peripheral-side controller.
    pub const I2C_ADDRESS: u8 = constants::I2C_ADDRESS;

    /// Power-on reset window, in always-on clock cycles.
    pub const RESET_DELAY: u32 = constants::RESET_DELAY;
}

/// Construction parameters for a target.
///
/// Peripheral counts are fixed once the target is built; the topology never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Number of OUT (host to device) FIFOs on the host-bridge arbiter.
    #[serde(default = "TargetConfig::default_out_count")]
    pub out_count: usize,

    /// Number of IN (device to host) FIFOs on the host-bridge arbiter.
    #[serde(default = "TargetConfig::default_in_count")]
    pub in_count: usize,

    /// Queue depth of each arbiter FIFO.
    #[serde(default = "TargetConfig::default_fifo_depth")]
    pub fifo_depth: usize,

    /// Size of the I2C register file; `0` omits the register file entirely.
    #[serde(default = "TargetConfig::default_reg_count")]
    pub reg_count: usize,

    /// 7-bit address of the I2C peripheral-side controller.
    #[serde(default = "TargetConfig::default_i2c_address")]
    pub i2c_address: u8,

    /// Initial value of the power-on reset counter.
    #[serde(default = "TargetConfig::default_reset_delay")]
    pub reset_delay: u32,
}

impl TargetConfig {
    fn default_out_count() -> usize {
        defaults::OUT_COUNT
    }

    fn default_in_count() -> usize {
        defaults::IN_COUNT
    }

    fn default_fifo_depth() -> usize {
        defaults::FIFO_DEPTH
    }

    fn default_reg_count() -> usize {
        defaults::REG_COUNT
    }

    fn default_i2c_address() -> u8 {
        defaults::I2C_ADDRESS
    }

    fn default_reset_delay() -> u32 {
        defaults::RESET_DELAY
    }

    /// Creates a configuration with the given FIFO counts and reference defaults for the rest.
    pub fn new(out_count: usize, in_count: usize) -> Self {
        Self {
            out_count,
            in_count,
            ..Self::default()
        }
    }

    /// Sets the queue depth of every FIFO.
    #[must_use]
    pub const fn with_fifo_depth(mut self, fifo_depth: usize) -> Self {
        self.fifo_depth = fifo_depth;
        self
    }

    /// Sets the register file size.
    #[must_use]
    pub const fn with_reg_count(mut self, reg_count: usize) -> Self {
        self.reg_count = reg_count;
        self
    }

    /// Overrides the I2C address.
    #[must_use]
    pub const fn with_i2c_address(mut self, i2c_address: u8) -> Self {
        self.i2c_address = i2c_address;
        self
    }

    /// Overrides the power-on reset window.
    #[must_use]
    pub const fn with_reset_delay(mut self, reset_delay: u32) -> Self {
        self.reset_delay = reset_delay;
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// Omitted fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::Config`] on malformed JSON and
    /// [`TargetError::InvalidConfig`] when a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, TargetError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), TargetError> {
        if self.fifo_depth == 0 {
            return Err(TargetError::InvalidConfig {
                field: "fifo_depth",
                reason: "must be positive".into(),
            });
        }
        if self.reset_delay == 0 {
            return Err(TargetError::InvalidConfig {
                field: "reset_delay",
                reason: "must be positive".into(),
            });
        }
        if self.i2c_address > constants::I2C_ADDRESS_MAX {
            return Err(TargetError::InvalidConfig {
                field: "i2c_address",
                reason: format!("{:#04x} does not fit in 7 bits", self.i2c_address),
            });
        }
        Ok(())
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            out_count: defaults::OUT_COUNT,
            in_count: defaults::IN_COUNT,
            fifo_depth: defaults::FIFO_DEPTH,
            reg_count: defaults::REG_COUNT,
            i2c_address: defaults::I2C_ADDRESS,
            reset_delay: defaults::RESET_DELAY,
        }
    }
}
