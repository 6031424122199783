//! Configuration management module.
//!
//! This module handles loading, parsing and validating the device
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **credentials**: where the certificate and private key live, optional CA file
//! - **device**: thing name, manufacturer, model and report interval
//! - **endpoint**: AWS IoT Core endpoint host, port and connect timeout
//!
//! # Features
//!
//! - Defaults for every value, so partial files are accepted
//! - Environment variable overrides (`IOT_BASE_DIR`, `IOT_THING_NAME`, `IOT_ENDPOINT`)
//! - Validation of the thing name against the AWS naming rule
//! - Default file generation with `--create-config`
//!
//! # Example
//!
//! ```rust,ignore
//! use iotcore_keystore::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.apply_env_overrides();
//! config.validate()?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
