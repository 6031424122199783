/// Errors raised by keystore operations.
pub mod key_store_error;
