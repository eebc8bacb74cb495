//! I2C peripheral-side controller.
//!
//! The protocol state machine lives in the `i2c_target` cell; the composition only
//! binds it to the board's I2C bus and drives its `address` input with a constant.
//! Cells layered on the controller see each transaction through [`TRANSACTION_NETS`].

use crate::soc::traits::{Peripheral, Resource};

/// Byte-level transaction interface the core exports, as `(signal, width)`.
///
/// `start`/`stop`/`restart` flag bus conditions; `write` strobes `data_i` in and is
/// acknowledged with `ack_o`; `read` requests `data_o`, and `ack_i` carries the
/// controller's acknowledge.
pub const TRANSACTION_NETS: &[(&str, u32)] = &[
    ("start", 1),
    ("stop", 1),
    ("restart", 1),
    ("write", 1),
    ("data_i", 8),
    ("ack_o", 1),
    ("read", 1),
    ("data_o", 8),
    ("ack_i", 1),
];

/// I2C target core attached to the host-side bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I2cTarget {
    /// Bus the core listens on.
    bus: Resource,
    /// 7-bit address the core answers on.
    address: u8,
}

impl I2cTarget {
    /// Attaches a target core to `bus`, answering on `address`.
    pub const fn new(bus: Resource, address: u8) -> Self {
        Self { bus, address }
    }

    /// Address wired into the core's `address` input.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// The I2C bus resource.
    pub const fn bus(&self) -> &Resource {
        &self.bus
    }
}

impl Peripheral for I2cTarget {
    fn name(&self) -> &str {
        "i2c_target"
    }

    fn cell(&self) -> &str {
        "i2c_target"
    }

    fn parameters(&self) -> Vec<(&'static str, u64)> {
        vec![("ADDRESS", u64::from(self.address))]
    }

    fn resource(&self) -> Option<&Resource> {
        Some(&self.bus)
    }

    fn exports(&self) -> Vec<(&'static str, u32)> {
        TRANSACTION_NETS.to_vec()
    }
}
