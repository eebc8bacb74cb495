//! # Reference Board Tests

use gateware_target::common::PlatformError;
use gateware_target::soc::{Board, Platform};

#[test]
fn test_board_identity() {
    let board = Board::new();
    assert_eq!(board.device(), "hx8k");
    assert_eq!(board.package(), "bg121");
}

#[test]
fn test_single_instance_resources() {
    let mut board = Board::new();
    for (name, width) in [("clk_if", 1), ("i2c", 2), ("fx2", 18), ("sync", 1)] {
        let res = board.request(name).unwrap();
        assert_eq!(res.name, name);
        assert_eq!(res.number, 0);
        assert_eq!(res.width, width);
        assert_eq!(board.requested(name), 1);
    }
}

#[test]
fn test_io_banks_are_numbered_in_request_order() {
    let mut board = Board::new();
    assert_eq!(board.request("io").unwrap().number, 0);
    assert_eq!(board.request("io").unwrap().number, 1);
}

#[test]
fn test_io_banks_are_exhaustible() {
    let mut board = Board::new();
    let _ = board.request("io").unwrap();
    let _ = board.request("io").unwrap();
    match board.request("io") {
        Err(PlatformError::ResourceUnavailable { name, number }) => {
            assert_eq!(name, "io");
            assert_eq!(number, 2);
        }
        other => panic!("expected ResourceUnavailable, got {other:?}"),
    }
    assert_eq!(board.requested("io"), 2);
}

#[test]
fn test_second_request_of_single_resource_fails() {
    let mut board = Board::new();
    let _ = board.request("sync").unwrap();
    assert!(matches!(
        board.request("sync"),
        Err(PlatformError::ResourceUnavailable { number: 1, .. })
    ));
}

#[test]
fn test_unknown_resource() {
    let mut board = Board::new();
    assert!(matches!(
        board.request("led"),
        Err(PlatformError::UnknownResource { ref name }) if name == "led"
    ));
    assert_eq!(board.requested("led"), 0);
}

#[test]
fn test_resource_display() {
    let mut board = Board::new();
    let res = board.request("io").unwrap();
    assert_eq!(res.to_string(), "io#0");
    assert_eq!(res.port_name(), "io_0");
}
