//! In-memory keystore.
//!
//! Entries are addressed by alias and protected by a password, mirroring the
//! key-entry part of a platform keystore. Nothing is ever backed by a file.
//!
//! # Entries
//!
//! Each entry holds a private key, its certificate chain (leaf first) and the
//! entry password. Insertion verifies that the private key belongs to the
//! leaf certificate; retrieval of the key requires the password.
//!
//! # Thread Safety
//!
//! The entry map sits behind a `parking_lot::RwLock`, so a keystore can be
//! shared through an `Arc` and read concurrently.
//!
//! # Example
//!
//! ```rust,ignore
//! use iotcore_keystore::keystore::structs::key_password::KeyPassword;
//! use iotcore_keystore::keystore::structs::key_store::KeyStore;
//!
//! let store = KeyStore::new();
//! let password = KeyPassword::generate();
//! store.set_key_entry("alias", private_key, &password, certificate_chain)?;
//! let entry = store.get_key_entry("alias", &password)?;
//! ```

/// Keystore error enumeration.
pub mod enums;

/// Implementation blocks for the keystore types.
pub mod impls;

/// Keystore data structures.
pub mod structs;
