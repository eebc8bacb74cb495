//! Platform and peripheral traits.
//!
//! This module defines the seams between the target composition and its collaborators:
//! 1. **Resources:** `Resource` handles handed out by the board for named pin groups.
//! 2. **Platform:** Resource requests, hardware description output, and toolchain builds.
//! 3. **Peripherals:** A common `Peripheral` view over the instantiated cores.
//!
//! All platforms must be `Send + Sync` so a composed target can be moved to a build thread.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::common::PlatformError;
use crate::soc::design::Design;

/// Handle to a named group of board pins.
///
/// Multi-instance resources (e.g. `io`) are distinguished by `number`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resource {
    /// Resource name as listed by the board.
    pub name: String,
    /// Instance number within resources sharing the name.
    pub number: usize,
    /// Number of signals in the group.
    pub width: u32,
}

impl Resource {
    /// Creates a resource handle.
    pub fn new(name: impl Into<String>, number: usize, width: u32) -> Self {
        Self {
            name: name.into(),
            number,
            width,
        }
    }

    /// Returns the port identifier used for this resource in the hardware description.
    pub fn port_name(&self) -> String {
        format!("{}_{}", self.name, self.number)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.number)
    }
}

/// Board collaborator: owns pin resources and drives the synthesis toolchain.
pub trait Platform: Send + Sync {
    /// Hands out the next unused instance of the named resource.
    ///
    /// # Errors
    ///
    /// [`PlatformError::UnknownResource`] if the board has no such resource, or
    /// [`PlatformError::ResourceUnavailable`] once every instance has been requested.
    fn request(&mut self, name: &str) -> Result<Resource, PlatformError>;

    /// Renders the design as hardware description text.
    ///
    /// # Errors
    ///
    /// Returns a platform error if the design cannot be expressed on this board.
    fn hardware_description(&self, design: &Design) -> Result<String, PlatformError>;

    /// Runs the toolchain on `design`, leaving intermediates and `top.bin` in `build_dir`.
    ///
    /// # Errors
    ///
    /// Returns a platform error if any toolchain step fails.
    fn build(&self, design: &Design, build_dir: &Path) -> Result<(), PlatformError>;
}

/// Common view over an instantiated peripheral core.
pub trait Peripheral {
    /// Returns the instance name used in the hardware description (e.g. `"i2c_target"`).
    fn name(&self) -> &str;

    /// Returns the module (cell type) this peripheral instantiates.
    fn cell(&self) -> &str;

    /// Returns the `(name, value)` parameters the cell is instantiated with.
    fn parameters(&self) -> Vec<(&'static str, u64)> {
        Vec::new()
    }

    /// Returns the board resource the peripheral is attached to, if any.
    fn resource(&self) -> Option<&Resource> {
        None
    }

    /// Returns the `(signal, width)` nets this cell shares with the cells layered on it.
    fn exports(&self) -> Vec<(&'static str, u32)> {
        Vec::new()
    }

    /// Returns the instance name of the cell whose exported nets this peripheral consumes.
    fn upstream(&self) -> Option<&str> {
        None
    }
}
