//! # Configuration Tests
//!
//! Defaults, JSON deserialization, and builder-style overrides.

use mips_disasm::config::Config;
use mips_disasm::isa::abi::RegisterNames;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.start_address, 0x0040_0000);
    assert_eq!(config.register_names, RegisterNames::Numeric);
}

#[test]
fn test_json_empty_object_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_json_full() {
    let json = r#"{ "start_address": 630848, "register_names": "abi" }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.start_address, 0x9A040);
    assert_eq!(config.register_names, RegisterNames::Abi);
}

#[test]
fn test_json_numeric_register_names() {
    let config = Config::from_json(r#"{ "register_names": "numeric" }"#).unwrap();
    assert_eq!(config.register_names, RegisterNames::Numeric);
    assert_eq!(config.start_address, 0x0040_0000);
}

#[test]
fn test_json_rejects_unknown_register_style() {
    assert!(Config::from_json(r#"{ "register_names": "symbolic" }"#).is_err());
}

#[test]
fn test_json_rejects_out_of_range_address() {
    assert!(Config::from_json(r#"{ "start_address": 4294967296 }"#).is_err());
    assert!(Config::from_json(r#"{ "start_address": -4 }"#).is_err());
}

#[test]
fn test_json_malformed() {
    assert!(Config::from_json("{ start_address: ").is_err());
}

#[test]
fn test_builder_overrides() {
    let config = Config::default()
        .with_start_address(0x9A040)
        .with_register_names(RegisterNames::Abi);
    assert_eq!(config.start_address, 0x9A040);
    assert_eq!(config.register_names, RegisterNames::Abi);
}
