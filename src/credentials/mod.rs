//! Credential loading for AWS IoT Core devices.
//!
//! This module turns a PEM certificate chain and a private key on disk into
//! a [`CredentialBundle`](structs::credential_bundle::CredentialBundle): a
//! single-entry [`KeyStore`](crate::keystore::structs::key_store::KeyStore)
//! protected by a freshly generated password, ready to be handed to a
//! mutual-TLS client.
//!
//! # Supported Inputs
//!
//! - Certificates: one or more PEM `CERTIFICATE` blocks, leaf first
//! - Private keys: PEM `PRIVATE KEY` (PKCS#8), `RSA PRIVATE KEY` (PKCS#1),
//!   `EC PRIVATE KEY` (SEC1), or the same structures as raw DER
//!
//! # Key Algorithm Detection
//!
//! PKCS#8 keys carry their algorithm identifier. Bare keys (PKCS#1 or SEC1
//! DER without a PEM label) do not, and are interpreted with the caller's
//! [`KeyAlgorithm`](enums::key_algorithm::KeyAlgorithm) hint, falling back to
//! [`DEFAULT_KEY_ALGORITHM`](enums::key_algorithm::DEFAULT_KEY_ALGORITHM)
//! (RSA) when no hint is given.
//!
//! # Example
//!
//! ```rust,ignore
//! use iotcore_keystore::credentials::credentials::{check_credentials_exist, load_credential_bundle};
//!
//! if check_credentials_exist("thing-certificate.pem.crt", "thing-private.pem.key") {
//!     let bundle = load_credential_bundle("thing-certificate.pem.crt", "thing-private.pem.key", None)?;
//!     let certified_key = bundle.certified_key()?;
//! }
//! ```

/// Entry points: existence check and bundle loading.
#[allow(clippy::module_inception)]
pub mod credentials;

/// Error, algorithm and encoding enumerations.
pub mod enums;

/// Implementation blocks for the credential types.
pub mod impls;

/// Credential data structures (chain, key, bundle, loader).
pub mod structs;
