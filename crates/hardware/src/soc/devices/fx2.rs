//! FX2 host-bridge FIFO arbiter.
//!
//! The arbiter multiplexes the FX2 slave-FIFO bus onto a set of OUT (host to
//! device) and IN (device to host) FIFOs. Queue semantics are implemented by the
//! `fx2_arbiter` cell; this module only tracks the handles the rest of the
//! gateware connects to.
//!
//! # FIFO handles
//!
//! Handles live in the arbiter and are only ever lent out by reference, so every
//! accessor that names the same bank yields the same handle.

use std::fmt;

use serde::Serialize;

use crate::soc::traits::{Peripheral, Resource};

/// Transfer direction, from the host's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Host to device.
    Out,
    /// Device to host.
    In,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Out => f.write_str("OUT"),
            Self::In => f.write_str("IN"),
        }
    }
}

/// One arbiter FIFO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fifo {
    /// Transfer direction.
    pub direction: Direction,
    /// Bank index the FIFO serves.
    pub index: usize,
    /// Queue depth in bytes.
    pub depth: usize,
}

impl Fifo {
    /// Instance name used in the hardware description (e.g. `"out_fifo_0"`).
    pub fn name(&self) -> String {
        match self.direction {
            Direction::Out => format!("out_fifo_{}", self.index),
            Direction::In => format!("in_fifo_{}", self.index),
        }
    }
}

/// Host-bridge arbiter owning every FIFO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FifoArbiter {
    bus: Resource,
    depth: usize,
    out_fifos: Vec<Fifo>,
    in_fifos: Vec<Fifo>,
}

impl FifoArbiter {
    /// Creates an arbiter on `bus` with the given FIFO counts and queue depth.
    pub fn new(bus: Resource, out_count: usize, in_count: usize, depth: usize) -> Self {
        let make = |direction, index| Fifo {
            direction,
            index,
            depth,
        };
        Self {
            bus,
            depth,
            out_fifos: (0..out_count).map(|i| make(Direction::Out, i)).collect(),
            in_fifos: (0..in_count).map(|i| make(Direction::In, i)).collect(),
        }
    }

    /// OUT FIFO at bank `index`, if the arbiter has one.
    pub fn out_fifo(&self, index: usize) -> Option<&Fifo> {
        self.out_fifos.get(index)
    }

    /// IN FIFO at bank `index`, if the arbiter has one.
    pub fn in_fifo(&self, index: usize) -> Option<&Fifo> {
        self.in_fifos.get(index)
    }

    /// All OUT FIFOs, in bank order.
    pub fn out_fifos(&self) -> &[Fifo] {
        &self.out_fifos
    }

    /// All IN FIFOs, in bank order.
    pub fn in_fifos(&self) -> &[Fifo] {
        &self.in_fifos
    }

    /// Queue depth shared by every FIFO.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The FX2 bus resource.
    pub const fn bus(&self) -> &Resource {
        &self.bus
    }
}

impl Peripheral for FifoArbiter {
    fn name(&self) -> &str {
        "arbiter"
    }

    fn cell(&self) -> &str {
        "fx2_arbiter"
    }

    fn parameters(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("OUT_COUNT", self.out_fifos.len() as u64),
            ("IN_COUNT", self.in_fifos.len() as u64),
            ("DEPTH", self.depth as u64),
        ]
    }

    fn resource(&self) -> Option<&Resource> {
        Some(&self.bus)
    }
}
