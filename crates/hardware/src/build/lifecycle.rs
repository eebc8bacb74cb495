//! Bitstream build lifecycle.
//!
//! Wraps one toolchain invocation in a build session that owns the build directory.
//! The session performs:
//! 1. **Acquisition:** Uses the caller's directory, or creates a fresh `glasgow_*` temporary one.
//! 2. **Build:** Runs the toolchain against the directory and reads `top.bin` back.
//! 3. **Release:** Applies the cleanup policy once, on every exit path.
//!
//! # Cleanup policy
//!
//! | outcome | debug | build directory      |
//! |---------|-------|----------------------|
//! | success | no    | removed              |
//! | success | yes   | removed              |
//! | failure | no    | removed              |
//! | failure | yes   | kept, path reported  |
//!
//! A failure to read `top.bin` after the toolchain reported success counts as a
//! build failure. A panic inside the toolchain is treated as a failure as well.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::common::constants::{BITSTREAM_FILE, BUILD_DIR_PREFIX};
use crate::common::{BuildError, PlatformError, TargetError};

/// Options for one bitstream build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Directory to build in; a temporary directory is created when `None`.
    pub build_dir: Option<PathBuf>,
    /// Keep the build directory of a failed build for inspection.
    pub debug: bool,
}

impl BuildOptions {
    /// Builds in a fresh temporary directory with debug off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds in `dir` instead of a temporary directory.
    ///
    /// The directory is still removed afterwards according to the cleanup policy.
    #[must_use]
    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = Some(dir.into());
        self
    }

    /// Sets debug mode.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// What releasing the build directory did.
#[derive(Debug)]
enum Release {
    Removed,
    Kept(PathBuf),
    Failed { path: PathBuf, source: io::Error },
    AlreadyReleased,
}

/// Exclusive owner of a build directory for the duration of one build.
#[derive(Debug)]
struct BuildSession {
    dir: PathBuf,
    debug: bool,
    released: bool,
}

impl BuildSession {
    fn open(options: &BuildOptions) -> Result<Self, TargetError> {
        let dir = match &options.build_dir {
            Some(dir) => dir.clone(),
            None => {
                let tmp = tempfile::Builder::new()
                    .prefix(BUILD_DIR_PREFIX)
                    .disable_cleanup(true)
                    .tempdir()
                    .map_err(TargetError::TempDir)?;
                tmp.path().to_path_buf()
            }
        };
        Ok(Self {
            dir,
            debug: options.debug,
            released: false,
        })
    }

    fn run<F>(&self, build: F) -> Result<Vec<u8>, BuildError>
    where
        F: FnOnce(&Path) -> Result<(), PlatformError>,
    {
        build(&self.dir)?;
        let path = self.dir.join(BITSTREAM_FILE);
        fs::read(&path).map_err(|source| BuildError::MissingArtifact { path, source })
    }

    /// Applies the cleanup policy. Only the first call has any effect.
    fn release(&mut self, failed: bool) -> Release {
        if self.released {
            return Release::AlreadyReleased;
        }
        self.released = true;
        let dir = self.dir.clone();
        if failed && self.debug {
            tracing::warn!(build_dir = %dir.display(), "keeping build tree");
            return Release::Kept(dir);
        }
        tracing::debug!(build_dir = %dir.display(), "removing build tree");
        match fs::remove_dir_all(&dir) {
            Ok(()) => Release::Removed,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Release::Removed,
            Err(source) => Release::Failed { path: dir, source },
        }
    }

    fn finish(mut self, outcome: Result<Vec<u8>, BuildError>) -> Result<Vec<u8>, TargetError> {
        let release = self.release(outcome.is_err());
        match outcome {
            Ok(bitstream) => match release {
                Release::Failed { path, source } => Err(TargetError::Cleanup { path, source }),
                _ => Ok(bitstream),
            },
            Err(cause) => {
                let kept_build_dir = match release {
                    Release::Kept(dir) => Some(dir),
                    Release::Failed { path, source } => {
                        // A cleanup failure must not mask the build failure.
                        tracing::warn!(build_dir = %path.display(), error = %source, "cannot remove build tree");
                        None
                    }
                    Release::Removed | Release::AlreadyReleased => None,
                };
                tracing::error!(error = %cause, "build failed");
                Err(TargetError::BuildFailed {
                    cause,
                    kept_build_dir,
                })
            }
        }
    }
}

impl Drop for BuildSession {
    // Reached with the directory still held only when the build unwound.
    fn drop(&mut self) {
        if let Release::Failed { path, source } = self.release(true) {
            tracing::warn!(build_dir = %path.display(), error = %source, "cannot remove build tree");
        }
    }
}

/// Runs `build` in a build session and returns the bitstream it produced.
///
/// `build` receives the build directory and must leave `top.bin` in it.
///
/// # Errors
///
/// * [`TargetError::TempDir`] if no temporary directory could be created.
/// * [`TargetError::BuildFailed`] if `build` fails or `top.bin` cannot be read; with
///   `debug` set, `kept_build_dir` names the preserved directory.
/// * [`TargetError::Cleanup`] if the build succeeded but its directory could not be removed.
pub fn produce_bitstream<F>(options: &BuildOptions, build: F) -> Result<Vec<u8>, TargetError>
where
    F: FnOnce(&Path) -> Result<(), PlatformError>,
{
    let session = BuildSession::open(options)?;
    tracing::info!(build_dir = %session.dir.display(), debug = options.debug, "building bitstream");
    let outcome = session.run(build);
    if let Ok(bitstream) = &outcome {
        tracing::info!(bytes = bitstream.len(), "bitstream ready");
    }
    session.finish(outcome)
}
