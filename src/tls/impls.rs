pub mod handshake_summary;
pub mod key_store_cert_resolver;
