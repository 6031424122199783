/// Errors surfaced by the credential loader.
pub mod credential_error;

/// Underlying causes of certificate and key decode failures.
pub mod decode_error;

/// Private key algorithms.
pub mod key_algorithm;

/// Private key container encodings.
pub mod key_encoding;
