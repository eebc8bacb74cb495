//! Platform, Build, and Target error definitions.
//!
//! This module defines the error taxonomy of the library. It provides:
//! 1. **Platform Errors:** Failures reported by the board collaborator (resources, toolchain).
//! 2. **Build Errors:** The cause of a failed bitstream build.
//! 3. **Target Errors:** The surface returned to callers of the composition and build lifecycle.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::soc::devices::fx2::Direction;

/// Errors reported by a [`Platform`](crate::soc::traits::Platform) implementation.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The board has no resource with this name.
    #[error("unknown resource `{name}`")]
    UnknownResource {
        /// Requested resource name.
        name: String,
    },

    /// Every instance of the named resource has already been handed out.
    #[error("resource `{name}#{number}` is not available on this board")]
    ResourceUnavailable {
        /// Requested resource name.
        name: String,
        /// Instance number that was requested.
        number: usize,
    },

    /// A toolchain executable could not be located on `PATH`.
    #[error("toolchain program `{tool}` not found")]
    ToolNotFound {
        /// Program name.
        tool: String,
    },

    /// A toolchain executable ran and exited unsuccessfully.
    #[error("`{tool}` failed ({status}):\n{stderr}")]
    ToolFailed {
        /// Program name.
        tool: String,
        /// Exit status of the process.
        status: ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },

    /// Filesystem or process I/O failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Cause of a failed bitstream build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The platform toolchain reported a failure.
    #[error(transparent)]
    Toolchain(#[from] PlatformError),

    /// The toolchain finished but the bitstream could not be read.
    #[error("cannot read bitstream `{}`: {source}", path.display())]
    MissingArtifact {
        /// Expected artifact path.
        path: PathBuf,
        /// Underlying read failure.
        source: io::Error,
    },
}

/// Errors returned by target composition, port lookup, and the build lifecycle.
#[derive(Debug, Error)]
pub enum TargetError {
    /// A port specifier outside the port alphabet was passed.
    #[error("unknown I/O port `{0}`")]
    InvalidPortSpecifier(String),

    /// The port is valid but the arbiter was built without a FIFO at that index.
    #[error("no {direction} FIFO for I/O port `{port}`")]
    NoSuchFifo {
        /// FIFO direction that was requested.
        direction: Direction,
        /// Port specifier that was resolved.
        port: String,
    },

    /// A configuration value is outside its permitted range.
    #[error("invalid configuration `{field}`: {reason}")]
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A platform failure outside of a build (e.g. resource exhaustion during composition).
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// The bitstream build failed.
    ///
    /// `kept_build_dir` is set when debug mode preserved the build tree for inspection.
    #[error("build failed: {cause}")]
    BuildFailed {
        /// Underlying failure.
        #[source]
        cause: BuildError,
        /// Build directory left on disk, if any.
        kept_build_dir: Option<PathBuf>,
    },

    /// The temporary build directory could not be created.
    #[error("cannot create build directory: {0}")]
    TempDir(#[source] io::Error),

    /// The build directory could not be removed after a successful build.
    #[error("cannot remove build directory `{}`: {source}", path.display())]
    Cleanup {
        /// Directory that was being removed.
        path: PathBuf,
        /// Underlying removal failure.
        source: io::Error,
    },

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Config(#[from] serde_json::Error),
}
