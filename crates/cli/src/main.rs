//! Gateware target CLI.
//!
//! This binary drives the target library from the command line. It provides:
//! 1. **Verilog:** Print the hardware description of the composed target.
//! 2. **Design:** Print the plain-data design as JSON.
//! 3. **Build:** Run the toolchain and write the bitstream to a file.
//! 4. **Ports:** List the port specifiers and the resources they resolve to.

use std::error::Error;
use std::path::PathBuf;
use std::{fs, process};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gateware_target::soc::PortSpec;
use gateware_target::soc::devices::Fifo;
use gateware_target::{Board, BuildOptions, Target, TargetConfig, TargetError};

#[derive(Parser, Debug)]
#[command(
    name = "gateware",
    author,
    version,
    about = "Compose the adapter gateware and build its bitstream",
    long_about = "Compose the adapter gateware target and build its bitstream with the iCE40 open toolchain.\n\nExamples:\n  gateware verilog --out-count 2 --in-count 2\n  gateware build -o top.bin --config target.json\n  gateware build -o top.bin --debug --build-dir build/"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Target construction parameters shared by every subcommand.
#[derive(Args, Debug)]
struct TargetArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of OUT FIFOs.
    #[arg(long)]
    out_count: Option<usize>,

    /// Number of IN FIFOs.
    #[arg(long)]
    in_count: Option<usize>,

    /// FIFO queue depth.
    #[arg(long)]
    fifo_depth: Option<usize>,

    /// Register file size.
    #[arg(long)]
    reg_count: Option<usize>,

    /// Verilog sources implementing the peripheral cells.
    #[arg(long = "cell-source")]
    cell_sources: Vec<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the Verilog top-level module.
    Verilog {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the design description as JSON.
    Design {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Build the bitstream.
    Build {
        #[command(flatten)]
        target: TargetArgs,

        /// Output file for the bitstream.
        #[arg(short, long)]
        output: PathBuf,

        /// Build here instead of in a temporary directory (removed afterwards).
        #[arg(long)]
        build_dir: Option<PathBuf>,

        /// Keep the build directory if the build fails.
        #[arg(long)]
        debug: bool,
    },

    /// List the I/O ports and their resources.
    Ports {
        #[command(flatten)]
        target: TargetArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        report(e.as_ref());
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Verilog { target } => {
            let target = compose(&target)?;
            print!("{}", target.hardware_description()?);
        }
        Commands::Design { target } => {
            let target = compose(&target)?;
            println!("{}", serde_json::to_string_pretty(&target.design())?);
        }
        Commands::Build {
            target,
            output,
            build_dir,
            debug,
        } => {
            let target = compose(&target)?;
            let mut options = BuildOptions::new().with_debug(debug);
            if let Some(dir) = build_dir {
                options = options.with_build_dir(dir);
            }
            let bitstream = target.bitstream(&options)?;
            fs::write(&output, &bitstream)?;
            tracing::info!(path = %output.display(), bytes = bitstream.len(), "bitstream written");
        }
        Commands::Ports { target } => {
            let target = compose(&target)?;
            for port in PortSpec::ALL {
                let spec = port.as_str();
                let out = target.out_fifo(spec).map_or_else(|_| "-".to_owned(), Fifo::name);
                let inp = target.in_fifo(spec).map_or_else(|_| "-".to_owned(), Fifo::name);
                println!("{spec}: {} out={out} in={inp}", target.io_port(spec)?);
            }
        }
    }
    Ok(())
}

fn compose(args: &TargetArgs) -> Result<Target<Board>, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => TargetConfig::from_json(&fs::read_to_string(path)?)?,
        None => TargetConfig::default(),
    };
    if let Some(n) = args.out_count {
        config.out_count = n;
    }
    if let Some(n) = args.in_count {
        config.in_count = n;
    }
    if let Some(n) = args.fifo_depth {
        config.fifo_depth = n;
    }
    if let Some(n) = args.reg_count {
        config.reg_count = n;
    }
    let board = Board::new().with_cell_sources(args.cell_sources.iter().cloned());
    Ok(Target::new(board, &config)?)
}

/// Prints the error, plus the preserved build tree of a failed debug build.
fn report(e: &(dyn Error + 'static)) {
    eprintln!("error: {e}");
    if let Some(TargetError::BuildFailed {
        kept_build_dir: Some(dir),
        ..
    }) = e.downcast_ref::<TargetError>()
    {
        eprintln!("Keeping build tree as {}", dir.display());
    }
}
