/// Randomly generated entry password.
pub mod key_password;

/// Alias-addressed entry container.
pub mod key_store;

/// A single private key entry.
pub mod key_store_entry;
