//! Clock and Reset Generator (CRG).
//!
//! Buffers the board clock input into two domains:
//!
//! * `por`: the always-on, reset-less domain clocked straight from the input buffer.
//! * `sys`: shares the `por` clock but is held in reset while the power-on counter is non-zero.
//!
//! # Power-on sequencing
//!
//! The counter starts at the configured reset delay and counts down by one per `por`
//! cycle. It has no reset input of its own; the only way to reload it is a power cycle.
//! The `sys` reset is combinationally `counter != 0`, so it deasserts exactly once and
//! stays deasserted.

use serde::Serialize;

use crate::soc::traits::Resource;

/// Down-counter gating the system domain after power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetCounter {
    initial: u32,
    value: u32,
}

impl ResetCounter {
    /// Creates a counter loaded with its power-on value.
    pub const fn new(initial: u32) -> Self {
        Self {
            initial,
            value: initial,
        }
    }

    /// Advances one cycle. Saturates at zero.
    pub const fn tick(&mut self) {
        if self.value != 0 {
            self.value -= 1;
        }
    }

    /// Current counter value; always within `[0, initial]`.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Power-on value of the counter.
    pub const fn initial(&self) -> u32 {
        self.initial
    }

    /// Whether the gated domain is currently held in reset.
    pub const fn is_active(&self) -> bool {
        self.value != 0
    }

    /// Register width in bits needed to hold the initial value.
    pub const fn width(&self) -> u32 {
        if self.initial == 0 {
            1
        } else {
            u32::BITS - self.initial.leading_zeros()
        }
    }

    /// Reloads the power-on value.
    const fn power_on(&mut self) {
        self.value = self.initial;
    }
}

/// A named group of signals sharing one clock and reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockDomain {
    /// Domain name (`"por"` or `"sys"`).
    pub name: &'static str,
    /// Whether the domain has no reset at all.
    pub reset_less: bool,
}

impl ClockDomain {
    /// Creates a domain with a reset signal.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            reset_less: false,
        }
    }

    /// Creates a domain without a reset signal.
    pub const fn reset_less(name: &'static str) -> Self {
        Self {
            name,
            reset_less: true,
        }
    }
}

/// Clock and reset generator: one always-on domain and one reset-gated system domain.
#[derive(Debug, Clone)]
pub struct Crg {
    clk_if: Resource,
    por: ClockDomain,
    sys: ClockDomain,
    counter: ResetCounter,
}

impl Crg {
    /// Builds the CRG on the given clock input with a `reset_delay`-cycle power-on window.
    pub fn new(clk_if: Resource, reset_delay: u32) -> Self {
        tracing::debug!(clock = %clk_if, reset_delay, "power-on reset sequencer");
        Self {
            clk_if,
            por: ClockDomain::reset_less("por"),
            sys: ClockDomain::new("sys"),
            counter: ResetCounter::new(reset_delay),
        }
    }

    /// Advances the always-on domain by one cycle.
    ///
    /// Returns whether the system domain was held in reset during that cycle.
    pub const fn tick(&mut self) -> bool {
        let held = self.counter.is_active();
        self.counter.tick();
        held
    }

    /// Whether the system domain is currently held in reset.
    pub const fn sys_reset(&self) -> bool {
        self.counter.is_active()
    }

    /// Models removal and reapplication of device power.
    pub const fn power_cycle(&mut self) {
        self.counter.power_on();
    }

    /// The power-on counter.
    pub const fn counter(&self) -> &ResetCounter {
        &self.counter
    }

    /// Bit width of the counter register.
    pub const fn counter_width(&self) -> u32 {
        self.counter.width()
    }

    /// The always-on domain.
    pub const fn por(&self) -> &ClockDomain {
        &self.por
    }

    /// The reset-gated system domain.
    pub const fn sys(&self) -> &ClockDomain {
        &self.sys
    }

    /// The clock input resource.
    pub const fn clk_if(&self) -> &Resource {
        &self.clk_if
    }
}
