//! Reference board platform.
//!
//! Describes the revision A adapter: an iCE40HX8K in the BG121 package with a clock
//! input, the I2C bus shared with the FX2, the FX2 slave-FIFO bus, a sync strobe and
//! two 8-bit I/O banks.
//!
//! # Toolchain
//!
//! Builds run the open iCE40 flow inside the build directory:
//!
//! 1. `yosys`: synthesizes `top.v` plus any cell sources into `top.json`.
//! 2. `nextpnr-ice40`: places and routes into `top.asc`.
//! 3. `icepack`: packs the bitstream into `top.bin`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::build::toolchain;
use crate::common::PlatformError;
use crate::common::constants;
use crate::soc::design::Design;
use crate::soc::traits::{Platform, Resource};

/// Static description of one board resource.
#[derive(Debug, Clone, Copy)]
struct ResourceDef {
    name: &'static str,
    number: usize,
    width: u32,
}

/// FX2 slave-FIFO bus: FD[7:0], FLAG[3:0], SLOE, SLRD, SLWR, PKTEND, FIFOADR[1:0].
const FX2_WIDTH: u32 = 18;

const RESOURCES: &[ResourceDef] = &[
    ResourceDef { name: constants::RES_CLK_IF, number: 0, width: 1 },
    ResourceDef { name: constants::RES_I2C, number: 0, width: 2 },
    ResourceDef { name: constants::RES_FX2, number: 0, width: FX2_WIDTH },
    ResourceDef { name: constants::RES_SYNC, number: 0, width: 1 },
    ResourceDef { name: constants::RES_IO, number: 0, width: 8 },
    ResourceDef { name: constants::RES_IO, number: 1, width: 8 },
];

/// The reference board.
#[derive(Debug, Clone)]
pub struct Board {
    device: String,
    package: String,
    cell_sources: Vec<PathBuf>,
    requested: HashMap<String, usize>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates the revision A board with no resources handed out.
    pub fn new() -> Self {
        Self {
            device: "hx8k".to_owned(),
            package: "bg121".to_owned(),
            cell_sources: Vec::new(),
            requested: HashMap::new(),
        }
    }

    /// Adds Verilog sources implementing the peripheral cells, passed to synthesis.
    #[must_use]
    pub fn with_cell_sources(mut self, sources: impl IntoIterator<Item = PathBuf>) -> Self {
        self.cell_sources.extend(sources);
        self
    }

    /// FPGA device name as understood by `nextpnr-ice40`.
    pub fn device(&self) -> &str {
        &self.device
    }

    /// FPGA package name.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Number of instances of `name` already handed out.
    pub fn requested(&self, name: &str) -> usize {
        self.requested.get(name).copied().unwrap_or(0)
    }
}

impl Platform for Board {
    fn request(&mut self, name: &str) -> Result<Resource, PlatformError> {
        let number = self.requested(name);
        let Some(def) = RESOURCES
            .iter()
            .find(|def| def.name == name && def.number == number)
        else {
            if RESOURCES.iter().any(|def| def.name == name) {
                return Err(PlatformError::ResourceUnavailable {
                    name: name.to_owned(),
                    number,
                });
            }
            return Err(PlatformError::UnknownResource {
                name: name.to_owned(),
            });
        };
        let _ = self.requested.insert(name.to_owned(), number + 1);
        Ok(Resource::new(def.name, def.number, def.width))
    }

    fn hardware_description(&self, design: &Design) -> Result<String, PlatformError> {
        Ok(design.to_verilog())
    }

    fn build(&self, design: &Design, build_dir: &Path) -> Result<(), PlatformError> {
        fs::create_dir_all(build_dir)?;
        let top = &design.top;
        let verilog = format!("{top}.v");
        let json = format!("{top}.json");
        let asc = format!("{top}.asc");
        fs::write(build_dir.join(&verilog), self.hardware_description(design)?)?;

        let yosys = toolchain::find_tool("yosys")?;
        let nextpnr = toolchain::find_tool("nextpnr-ice40")?;
        let icepack = toolchain::find_tool("icepack")?;
        let sources = self
            .cell_sources
            .iter()
            .map(std::path::absolute)
            .collect::<Result<Vec<_>, _>>()?;

        toolchain::run(
            Command::new(yosys)
                .current_dir(build_dir)
                .arg("-q")
                .arg("-p")
                .arg(format!("synth_ice40 -top {top} -json {json}"))
                .arg(&verilog)
                .args(&sources),
            "yosys",
        )?;

        toolchain::run(
            Command::new(nextpnr)
                .current_dir(build_dir)
                .arg("--quiet")
                .arg(format!("--{}", self.device))
                .arg("--package")
                .arg(&self.package)
                .arg("--pcf-allow-unconstrained")
                .arg("--json")
                .arg(&json)
                .arg("--asc")
                .arg(&asc),
            "nextpnr-ice40",
        )?;

        toolchain::run(
            Command::new(icepack)
                .current_dir(build_dir)
                .arg(&asc)
                .arg(constants::BITSTREAM_FILE),
            "icepack",
        )
    }
}
