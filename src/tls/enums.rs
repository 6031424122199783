/// Errors raised while building or exercising TLS sessions.
pub mod tls_error;
