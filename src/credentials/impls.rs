pub mod certificate_chain;
pub mod credential_bundle;
pub mod credential_loader;
pub mod key_algorithm;
pub mod key_encoding;
pub mod private_key;
