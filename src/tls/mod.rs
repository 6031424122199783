//! Mutual-TLS client configuration.
//!
//! Turns a [`CredentialBundle`](crate::credentials::structs::credential_bundle::CredentialBundle)
//! into a `rustls::ClientConfig` that presents the keystore entry as the
//! client certificate, which is what AWS IoT Core expects from MQTT clients.
//!
//! # Features
//!
//! - Root store from a configured CA file or the bundled webpki roots
//! - Client certificate resolution straight from the keystore entry
//! - ALPN `x-amzn-mqtt-ca` when connecting on port 443
//! - A blocking handshake probe for diagnosing credentials and endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use iotcore_keystore::tls::tls::{create_client_config, handshake, load_root_store};
//!
//! let roots = load_root_store(None)?;
//! let config = create_client_config(&bundle, roots, 8883)?;
//! let summary = handshake(config, "example-ats.iot.us-east-1.amazonaws.com", 8883, timeout)?;
//! ```

/// TLS error enumeration.
pub mod enums;

/// Implementation blocks for the TLS types.
pub mod impls;

/// TLS data structures.
pub mod structs;

/// Client configuration builders and the handshake probe.
#[allow(clippy::module_inception)]
pub mod tls;
