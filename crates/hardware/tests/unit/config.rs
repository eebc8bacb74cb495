//! # Configuration Tests
//!
//! Defaults, JSON deserialization, setters, and validation of `TargetConfig`.

use gateware_target::TargetError;
use gateware_target::config::TargetConfig;

#[test]
fn test_config_default() {
    let config = TargetConfig::default();
    assert_eq!(config.out_count, 0);
    assert_eq!(config.in_count, 0);
    assert_eq!(config.fifo_depth, 511);
    assert_eq!(config.reg_count, 0);
    assert_eq!(config.i2c_address, 0b0001000);
    assert_eq!(config.reset_delay, 2047);
}

#[test]
fn test_config_new_keeps_defaults() {
    let config = TargetConfig::new(2, 1);
    assert_eq!(config.out_count, 2);
    assert_eq!(config.in_count, 1);
    assert_eq!(config.fifo_depth, 511);
    assert_eq!(config.reg_count, 0);
}

#[test]
fn test_config_setters() {
    let config = TargetConfig::new(1, 1)
        .with_fifo_depth(64)
        .with_reg_count(4)
        .with_i2c_address(0x42)
        .with_reset_delay(16);
    assert_eq!(config.fifo_depth, 64);
    assert_eq!(config.reg_count, 4);
    assert_eq!(config.i2c_address, 0x42);
    assert_eq!(config.reset_delay, 16);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_empty_json_is_default() {
    let config = TargetConfig::from_json("{}").unwrap();
    assert_eq!(config, TargetConfig::default());
}

#[test]
fn test_config_from_partial_json() {
    let config = TargetConfig::from_json(r#"{ "out_count": 2, "reg_count": 3 }"#).unwrap();
    assert_eq!(config.out_count, 2);
    assert_eq!(config.in_count, 0);
    assert_eq!(config.reg_count, 3);
    assert_eq!(config.fifo_depth, 511);
}

#[test]
fn test_config_rejects_unknown_fields() {
    let err = TargetConfig::from_json(r#"{ "out_cnt": 2 }"#).unwrap_err();
    assert!(matches!(err, TargetError::Config(_)));
}

#[test]
fn test_config_rejects_negative_counts() {
    let err = TargetConfig::from_json(r#"{ "in_count": -1 }"#).unwrap_err();
    assert!(matches!(err, TargetError::Config(_)));
}

#[test]
fn test_config_rejects_zero_fifo_depth() {
    let err = TargetConfig::from_json(r#"{ "fifo_depth": 0 }"#).unwrap_err();
    assert!(matches!(
        err,
        TargetError::InvalidConfig {
            field: "fifo_depth",
            ..
        }
    ));
}

#[test]
fn test_config_rejects_zero_reset_delay() {
    let err = TargetConfig::default().with_reset_delay(0).validate().unwrap_err();
    assert!(matches!(
        err,
        TargetError::InvalidConfig {
            field: "reset_delay",
            ..
        }
    ));
}

#[test]
fn test_config_rejects_eight_bit_i2c_address() {
    let err = TargetConfig::default().with_i2c_address(0x80).validate().unwrap_err();
    assert!(matches!(
        err,
        TargetError::InvalidConfig {
            field: "i2c_address",
            ..
        }
    ));
    assert!(err.to_string().contains("0x80"));
}
