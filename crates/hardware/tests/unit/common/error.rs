//! # Error Tests
//!
//! Display text and source chains of the library errors.

use gateware_target::common::{BuildError, PlatformError, TargetError};
use gateware_target::soc::devices::Direction;
use std::error::Error;
use std::io;
use std::path::PathBuf;

#[test]
fn test_invalid_port_specifier_names_the_port() {
    let err = TargetError::InvalidPortSpecifier("C".into());
    assert_eq!(err.to_string(), "unknown I/O port `C`");
}

#[test]
fn test_no_such_fifo_display() {
    let err = TargetError::NoSuchFifo {
        direction: Direction::In,
        port: "B".into(),
    };
    assert_eq!(err.to_string(), "no IN FIFO for I/O port `B`");
}

#[test]
fn test_resource_unavailable_display() {
    let err = PlatformError::ResourceUnavailable {
        name: "io".into(),
        number: 2,
    };
    assert_eq!(err.to_string(), "resource `io#2` is not available on this board");
}

#[test]
fn test_platform_error_passes_through_target_error() {
    let err: TargetError = PlatformError::UnknownResource { name: "led".into() }.into();
    assert_eq!(err.to_string(), "unknown resource `led`");
    assert!(matches!(err, TargetError::Platform(PlatformError::UnknownResource { .. })));
}

#[test]
fn test_build_failed_wraps_toolchain_error() {
    let err = TargetError::BuildFailed {
        cause: BuildError::Toolchain(PlatformError::ToolNotFound {
            tool: "yosys".into(),
        }),
        kept_build_dir: None,
    };
    assert_eq!(err.to_string(), "build failed: toolchain program `yosys` not found");

    let source = err.source().expect("build failure has a source");
    assert_eq!(source.to_string(), "toolchain program `yosys` not found");
}

#[test]
fn test_missing_artifact_names_path() {
    let err = BuildError::MissingArtifact {
        path: PathBuf::from("/tmp/glasgow_x/top.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };
    let text = err.to_string();
    assert!(text.contains("/tmp/glasgow_x/top.bin"));
    assert!(text.contains("gone"));
    assert!(err.source().is_some());
}

#[test]
fn test_cleanup_error_display() {
    let err = TargetError::Cleanup {
        path: PathBuf::from("/tmp/glasgow_y"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(
        err.to_string(),
        "cannot remove build directory `/tmp/glasgow_y`: denied"
    );
}
