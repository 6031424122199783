//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the crate.
//!
//! # Utilities
//!
//! - Writing files with their parent directories created on demand
//! - Deleting files without propagating failures
//! - Existence checks that treat an empty path as missing
//! - Constant-time comparison of secrets
//!
//! # Data Structures
//!
//! - `CustomError` - Message-only error type used by the binary and helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use iotcore_keystore::common::common::{check_file_exists, delete_file, write_file};
//!
//! write_file("ssl/TestSimpleIot-certificate.pem.crt", certificate_pem)?;
//! assert!(check_file_exists("ssl/TestSimpleIot-certificate.pem.crt"));
//! delete_file("ssl/TestSimpleIot-certificate.pem.crt");
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
