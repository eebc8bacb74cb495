//! Target composition and top-level `Target` type.
//!
//! This module assembles the complete gateware target from configuration. It performs:
//! 1. **Clocking:** Requests the clock input and builds the power-on reset sequencer.
//! 2. **Peripherals:** Attaches the I2C target, the optional register file, and the FX2 arbiter.
//! 3. **Ports:** Requests the sync strobe and one I/O bank per port specifier.
//! 4. **Build:** Hands the resulting design to the platform and runs the build lifecycle.
//!
//! The topology is fixed at construction; every accessor afterwards is read-only.

use std::path::Path;

use crate::build::lifecycle::{self, BuildOptions};
use crate::common::constants;
use crate::common::{PlatformError, TargetError};
use crate::config::TargetConfig;
use crate::soc::crg::Crg;
use crate::soc::design::{Cell, Design, ResetRegister};
use crate::soc::devices::{Direction, Fifo, FifoArbiter, I2cTarget, RegisterFile};
use crate::soc::ports::{self, PortSpec};
use crate::soc::traits::{Peripheral, Platform, Resource};

/// A composed gateware target bound to its platform.
#[derive(Debug)]
pub struct Target<P: Platform> {
    /// Board collaborator; owns resources and the toolchain.
    platform: P,
    /// Configuration the target was built from.
    config: TargetConfig,
    /// Clock and power-on reset generator.
    crg: Crg,
    /// I2C peripheral-side controller.
    i2c: I2cTarget,
    /// Register file; present iff `reg_count > 0`.
    registers: Option<RegisterFile>,
    /// Host-bridge FIFO arbiter.
    arbiter: FifoArbiter,
    /// Sync strobe resource.
    sync_port: Resource,
    /// I/O banks, indexed by [`PortSpec::index`].
    io_ports: Vec<Resource>,
    /// Every requested resource, in request order.
    resources: Vec<Resource>,
}

/// Requests `name` from the platform and records it.
fn request<P: Platform>(
    platform: &mut P,
    resources: &mut Vec<Resource>,
    name: &str,
) -> Result<Resource, PlatformError> {
    let res = platform.request(name)?;
    tracing::trace!(resource = %res, "requested");
    resources.push(res.clone());
    Ok(res)
}

impl<P: Platform> Target<P> {
    /// Composes a target on `platform`.
    ///
    /// Requests `clk_if`, `i2c`, `fx2`, `sync` and one `io` bank per port, in that order.
    /// The register file is only instantiated when `config.reg_count > 0`.
    ///
    /// # Errors
    ///
    /// [`TargetError::InvalidConfig`] for out-of-range configuration values, and
    /// [`TargetError::Platform`] if the platform cannot supply a resource.
    pub fn new(mut platform: P, config: &TargetConfig) -> Result<Self, TargetError> {
        config.validate()?;
        let mut resources = Vec::new();

        let clk_if = request(&mut platform, &mut resources, constants::RES_CLK_IF)?;
        let crg = Crg::new(clk_if, config.reset_delay);

        let i2c_bus = request(&mut platform, &mut resources, constants::RES_I2C)?;
        let i2c = I2cTarget::new(i2c_bus, config.i2c_address);

        let registers = (config.reg_count > 0).then(|| RegisterFile::new(&i2c, config.reg_count));

        let fx2 = request(&mut platform, &mut resources, constants::RES_FX2)?;
        let arbiter = FifoArbiter::new(fx2, config.out_count, config.in_count, config.fifo_depth);

        let sync_port = request(&mut platform, &mut resources, constants::RES_SYNC)?;
        let io_ports = PortSpec::ALL
            .iter()
            .map(|_| request(&mut platform, &mut resources, constants::RES_IO))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            out_count = config.out_count,
            in_count = config.in_count,
            fifo_depth = config.fifo_depth,
            reg_count = config.reg_count,
            "target composed"
        );

        Ok(Self {
            platform,
            config: config.clone(),
            crg,
            i2c,
            registers,
            arbiter,
            sync_port,
            io_ports,
            resources,
        })
    }

    /// Returns the I/O bank for port `spec`.
    ///
    /// # Errors
    ///
    /// [`TargetError::InvalidPortSpecifier`] if `spec` is not a port name.
    pub fn io_port(&self, spec: &str) -> Result<&Resource, TargetError> {
        let index = ports::resolve(spec)?;
        self.io_ports
            .get(index)
            .ok_or_else(|| TargetError::InvalidPortSpecifier(spec.to_owned()))
    }

    /// Returns the OUT FIFO for port `spec`.
    ///
    /// # Errors
    ///
    /// [`TargetError::InvalidPortSpecifier`] if `spec` is not a port name, or
    /// [`TargetError::NoSuchFifo`] if the arbiter has fewer OUT FIFOs than the port's bank index.
    pub fn out_fifo(&self, spec: &str) -> Result<&Fifo, TargetError> {
        let index = ports::resolve(spec)?;
        self.arbiter
            .out_fifo(index)
            .ok_or_else(|| no_such_fifo(Direction::Out, spec))
    }

    /// Returns the IN FIFO for port `spec`.
    ///
    /// # Errors
    ///
    /// As for [`Target::out_fifo`], with IN FIFOs.
    pub fn in_fifo(&self, spec: &str) -> Result<&Fifo, TargetError> {
        let index = ports::resolve(spec)?;
        self.arbiter
            .in_fifo(index)
            .ok_or_else(|| no_such_fifo(Direction::In, spec))
    }

    /// Returns the `(IN, OUT)` FIFO pair for port `spec`.
    ///
    /// # Errors
    ///
    /// As for [`Target::out_fifo`]; the IN FIFO is checked first.
    pub fn inout_fifo(&self, spec: &str) -> Result<(&Fifo, &Fifo), TargetError> {
        Ok((self.in_fifo(spec)?, self.out_fifo(spec)?))
    }

    /// The sync strobe resource.
    pub const fn sync_port(&self) -> &Resource {
        &self.sync_port
    }

    /// All I/O banks, in port order.
    pub fn io_ports(&self) -> &[Resource] {
        &self.io_ports
    }

    /// The I2C peripheral-side controller.
    pub const fn i2c(&self) -> &I2cTarget {
        &self.i2c
    }

    /// The register file, if one was configured.
    pub const fn registers(&self) -> Option<&RegisterFile> {
        self.registers.as_ref()
    }

    /// The FX2 FIFO arbiter.
    pub const fn arbiter(&self) -> &FifoArbiter {
        &self.arbiter
    }

    /// The clock and reset generator.
    pub const fn crg(&self) -> &Crg {
        &self.crg
    }

    /// Mutable access to the clock and reset generator, for stepping the reset sequence.
    pub const fn crg_mut(&mut self) -> &mut Crg {
        &mut self.crg
    }

    /// The configuration the target was composed from.
    pub const fn config(&self) -> &TargetConfig {
        &self.config
    }

    /// The platform the target is bound to.
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Every requested resource, in request order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Describes the composed target as plain data.
    pub fn design(&self) -> Design {
        let mut peripherals: Vec<&dyn Peripheral> = vec![&self.i2c];
        if let Some(registers) = &self.registers {
            peripherals.push(registers);
        }
        peripherals.push(&self.arbiter);

        Design {
            top: constants::TOP_NAME.to_owned(),
            clock: self.crg.clk_if().clone(),
            resources: self.resources.clone(),
            reset: ResetRegister {
                width: self.crg.counter_width(),
                initial: self.crg.counter().initial(),
            },
            cells: peripherals.into_iter().map(Cell::from_peripheral).collect(),
        }
    }

    /// Returns the platform's hardware description of the target.
    ///
    /// # Errors
    ///
    /// [`TargetError::Platform`] if the platform cannot render the design.
    pub fn hardware_description(&self) -> Result<String, TargetError> {
        Ok(self.platform.hardware_description(&self.design())?)
    }

    /// Runs the platform toolchain into `build_dir` without any cleanup.
    ///
    /// # Errors
    ///
    /// Returns the platform's error if any toolchain step fails.
    pub fn build(&self, build_dir: &Path) -> Result<(), PlatformError> {
        self.platform.build(&self.design(), build_dir)
    }

    /// Builds the target and returns its bitstream.
    ///
    /// See [`lifecycle`](crate::build::lifecycle) for the build directory cleanup policy.
    ///
    /// # Errors
    ///
    /// As for [`produce_bitstream`](crate::build::produce_bitstream).
    pub fn bitstream(&self, options: &BuildOptions) -> Result<Vec<u8>, TargetError> {
        let design = self.design();
        lifecycle::produce_bitstream(options, |dir| self.platform.build(&design, dir))
    }
}

fn no_such_fifo(direction: Direction, spec: &str) -> TargetError {
    TargetError::NoSuchFifo {
        direction,
        port: spec.to_owned(),
    }
}
