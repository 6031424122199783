//! Credential provisioning.
//!
//! Writes the certificate and private key of a freshly registered thing to
//! the paths the loader reads from. The input is the response of the AWS IoT
//! `CreateKeysAndCertificate` call, either as a JSON file or through
//! environment variables.
//!
//! Both PEM documents are decoded and checked against each other before any
//! file is touched, so a broken response never replaces working credentials.

/// Provisioning error enumeration.
pub mod enums;

/// Implementation blocks for the provisioning models.
pub mod impls;

/// Writes validated credentials to disk.
#[allow(clippy::module_inception)]
pub mod provisioning;

/// AWS response models.
pub mod structs;

/// Unit tests for provisioning.
pub mod tests;
