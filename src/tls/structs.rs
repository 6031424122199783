/// Outcome of a completed handshake.
pub mod handshake_summary;

/// Client certificate resolver backed by a keystore entry.
pub mod key_store_cert_resolver;
