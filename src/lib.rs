//! # iotcore-keystore
//!
//! Loads the X.509 certificate chain and private key of an AWS IoT Core
//! "thing" from disk and assembles them into a password protected, in-memory
//! keystore that a mutual-TLS client can authenticate with.
//!
//! ## Overview
//!
//! The loader checks that both files exist, decodes the PEM certificate
//! chain, decodes the private key (PKCS#8, PKCS#1 or SEC1, PEM or raw DER),
//! generates a fresh random password and stores the pair under the alias
//! `"alias"` in a new keystore. The resulting bundle plugs straight into a
//! `rustls::ClientConfig`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iotcore_keystore::credentials::credentials::load_credential_bundle;
//! use iotcore_keystore::tls::tls::{create_client_config, load_root_store};
//!
//! let bundle = load_credential_bundle(
//!     "ssl/TestSimpleIot-certificate.pem.crt",
//!     "ssl/TestSimpleIot-private.pem.key",
//!     None,
//! )?;
//! let config = create_client_config(&bundle, load_root_store(None)?, 8883)?;
//! ```
//!
//! ## Modules
//!
//! - [`credentials`] - Certificate chain and private key decoding, bundle assembly
//! - [`keystore`] - Alias addressed, password protected key entries
//! - [`tls`] - rustls client configuration and handshake probe
//! - [`device`] - Device shadow reports and update topics
//! - [`provisioning`] - Writing credentials from AWS responses or environment variables
//! - [`config`] - Configuration management and TOML parsing
//! - [`common`] - Shared utilities, logging setup and error handling
//! - [`structs`] - CLI argument parsing

/// Command handlers of the binary.
pub mod commands;

/// Common utilities and shared functionality.
///
/// Contains file helpers, logging setup, constant-time comparison and the
/// `CustomError` type.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml`, applies environment overrides and validates values.
pub mod config;

/// Credential loading module.
///
/// Decodes certificate chains and private keys and builds the credential
/// bundle handed to TLS clients.
pub mod credentials;

/// Device model module.
///
/// The `ReportableDevice` capability, the thing device and shadow messages.
pub mod device;

/// In-memory keystore module.
pub mod keystore;

/// Credential provisioning module.
///
/// Writes certificates and keys from `CreateKeysAndCertificate` responses or
/// environment variables, and generates self-signed development credentials.
pub mod provisioning;

/// CLI argument structures.
pub mod structs;

/// Mutual-TLS module built on rustls.
pub mod tls;
