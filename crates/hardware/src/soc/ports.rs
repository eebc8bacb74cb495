//! I/O port registry.
//!
//! Maps symbolic port specifiers (`"A"`, `"B"`) to the bank index used for the
//! I/O resources and the arbiter FIFOs. The alphabet is closed: anything else is a
//! programming error in the caller and is rejected with
//! [`TargetError::InvalidPortSpecifier`].

use std::fmt;
use std::str::FromStr;

use crate::common::TargetError;

/// Symbolic name of an I/O port bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PortSpec {
    /// Port A, bank 0.
    A,
    /// Port B, bank 1.
    B,
}

impl PortSpec {
    /// Every port, in bank order.
    pub const ALL: [Self; 2] = [Self::A, Self::B];

    /// Number of I/O banks on the target.
    pub const COUNT: usize = Self::ALL.len();

    /// Bank index of this port.
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// Port letter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl FromStr for PortSpec {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            other => Err(TargetError::InvalidPortSpecifier(other.to_owned())),
        }
    }
}

impl fmt::Display for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a port specifier to its bank index.
///
/// # Errors
///
/// Returns [`TargetError::InvalidPortSpecifier`] carrying `spec` when it is not in the alphabet.
pub fn resolve(spec: &str) -> Result<usize, TargetError> {
    spec.parse::<PortSpec>().map(PortSpec::index)
}
