//! Design description of a composed target.
//!
//! A [`Design`] is the plain-data form of a [`Target`](crate::soc::Target) handed to the
//! platform: the top-level ports (one per requested resource), the power-on reset
//! register, and the peripheral cells with their parameters. Equal configurations
//! produce equal designs.
//!
//! `to_verilog` renders the top-level module. Peripheral cells are emitted as
//! instantiations only; their implementations are supplied to the toolchain separately.
//! A cell's exported nets are declared as `<instance>_<signal>` wires and connected
//! to the exporting cell and to every cell naming it as upstream.

use std::fmt::Write as _;

use serde::Serialize;

use crate::soc::traits::{Peripheral, Resource};

/// Clock buffer primitive driving the always-on domain.
pub const CLOCK_BUFFER_CELL: &str = "SB_GB_IO";

/// Power-on reset register of the design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetRegister {
    /// Register width in bits.
    pub width: u32,
    /// Power-on value.
    pub initial: u32,
}

/// One peripheral cell instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Module being instantiated.
    pub cell: String,
    /// Instance name.
    pub name: String,
    /// `(name, value)` parameters.
    pub parameters: Vec<(String, u64)>,
    /// Board resource connected to the cell's `bus` port.
    pub resource: Option<Resource>,
    /// `(signal, width)` nets the cell exports to downstream cells.
    pub exports: Vec<(String, u32)>,
    /// Instance name of the cell whose exported nets this cell consumes.
    pub upstream: Option<String>,
}

impl Cell {
    /// Captures a peripheral as a cell instantiation.
    pub fn from_peripheral(peripheral: &dyn Peripheral) -> Self {
        Self {
            cell: peripheral.cell().to_owned(),
            name: peripheral.name().to_owned(),
            parameters: peripheral
                .parameters()
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
            resource: peripheral.resource().cloned(),
            exports: peripheral
                .exports()
                .into_iter()
                .map(|(name, width)| (name.to_owned(), width))
                .collect(),
            upstream: peripheral.upstream().map(str::to_owned),
        }
    }

    /// Wire name of the exported `signal`.
    pub fn net(&self, signal: &str) -> String {
        format!("{}_{signal}", self.name)
    }
}

/// Plain-data description of a composed target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Design {
    /// Top-level module name.
    pub top: String,
    /// Clock input feeding the clock buffer.
    pub clock: Resource,
    /// Every requested resource, in request order.
    pub resources: Vec<Resource>,
    /// Power-on reset register.
    pub reset: ResetRegister,
    /// Peripheral cells, in instantiation order.
    pub cells: Vec<Cell>,
}

impl Design {
    /// Renders the design as a Verilog top-level module.
    pub fn to_verilog(&self) -> String {
        let mut v = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_verilog(&mut v);
        v
    }

    fn write_verilog(&self, v: &mut String) -> std::fmt::Result {
        let ports: Vec<String> = self
            .resources
            .iter()
            .map(|res| {
                let dir = if *res == self.clock { "input " } else { "inout " };
                format!("    {dir} wire {}{}", range(res.width), res.port_name())
            })
            .collect();

        writeln!(v, "module {} (", self.top)?;
        writeln!(v, "{}", ports.join(",\n"))?;
        writeln!(v, ");")?;
        writeln!(v)?;

        let ResetRegister { width, initial } = self.reset;
        writeln!(v, "    wire por_clk;")?;
        writeln!(v, "    wire sys_clk = por_clk;")?;
        writeln!(v, "    reg  {}reset_delay = {width}'d{initial};", range(width))?;
        writeln!(v, "    wire sys_rst = reset_delay != 0;")?;
        writeln!(v)?;
        writeln!(v, "    {CLOCK_BUFFER_CELL} clk_buf (")?;
        writeln!(v, "        .PACKAGE_PIN({}),", self.clock.port_name())?;
        writeln!(v, "        .GLOBAL_BUFFER_OUTPUT(por_clk)")?;
        writeln!(v, "    );")?;
        writeln!(v)?;
        writeln!(v, "    always @(posedge por_clk)")?;
        writeln!(v, "        if (reset_delay != 0)")?;
        writeln!(v, "            reset_delay <= reset_delay - 1;")?;

        for cell in self.cells.iter().filter(|cell| !cell.exports.is_empty()) {
            writeln!(v)?;
            for (signal, width) in &cell.exports {
                writeln!(v, "    wire {}{};", range(*width), cell.net(signal))?;
            }
        }

        for cell in &self.cells {
            writeln!(v)?;
            if cell.parameters.is_empty() {
                writeln!(v, "    {} {} (", cell.cell, cell.name)?;
            } else {
                let params: Vec<String> = cell
                    .parameters
                    .iter()
                    .map(|(name, value)| format!(".{name}({value})"))
                    .collect();
                writeln!(v, "    {} #({}) {} (", cell.cell, params.join(", "), cell.name)?;
            }
            writeln!(v, "{}", self.connections(cell).join(",\n"))?;
            writeln!(v, "    );")?;
        }

        writeln!(v, "endmodule")
    }

    /// Port connections of one cell instance.
    fn connections(&self, cell: &Cell) -> Vec<String> {
        let mut conns = vec![
            "        .clk(sys_clk)".to_owned(),
            "        .rst(sys_rst)".to_owned(),
        ];
        if let Some(res) = &cell.resource {
            conns.push(format!("        .bus({})", res.port_name()));
        }
        let shared = cell.exports.iter().map(|(signal, _)| (cell, signal));
        // Nets of an upstream cell missing from the design are left unconnected.
        let upstream = cell
            .upstream
            .as_deref()
            .and_then(|name| self.cells.iter().find(|c| c.name == name))
            .into_iter()
            .flat_map(|up| up.exports.iter().map(move |(signal, _)| (up, signal)));
        conns.extend(
            shared
                .chain(upstream)
                .map(|(owner, signal)| format!("        .{signal}({})", owner.net(signal))),
        );
        conns
    }
}

fn range(width: u32) -> String {
    if width > 1 {
        format!("[{}:0] ", width - 1)
    } else {
        String::new()
    }
}
