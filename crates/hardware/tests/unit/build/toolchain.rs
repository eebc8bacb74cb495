//! # Toolchain Invocation Tests

use gateware_target::build::toolchain::{find_tool, run};
use gateware_target::common::PlatformError;
use std::process::Command;

#[test]
fn test_missing_tool_is_reported_by_name() {
    match find_tool("definitely-not-an-fpga-tool") {
        Err(PlatformError::ToolNotFound { tool }) => assert_eq!(tool, "definitely-not-an-fpga-tool"),
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn test_successful_step() {
    assert!(run(Command::new("sh").arg("-c").arg("exit 0"), "sh").is_ok());
}

#[cfg(unix)]
#[test]
fn test_failed_step_captures_stderr() {
    let err = run(
        Command::new("sh").arg("-c").arg("echo 'no placement found' >&2; exit 3"),
        "nextpnr-ice40",
    )
    .unwrap_err();
    match err {
        PlatformError::ToolFailed {
            tool,
            status,
            stderr,
        } => {
            assert_eq!(tool, "nextpnr-ice40");
            assert_eq!(status.code(), Some(3));
            assert!(stderr.contains("no placement found"));
        }
        other => panic!("expected ToolFailed, got {other:?}"),
    }
}

#[test]
fn test_unspawnable_program_is_io_error() {
    let err = run(&mut Command::new("/nonexistent/yosys"), "yosys").unwrap_err();
    assert!(matches!(err, PlatformError::Io(_)));
}
