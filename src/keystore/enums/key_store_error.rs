use crate::credentials::enums::decode_error::DecodeError;
use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyStoreError {
    #[error("Alias not found: {0}")]
    AliasNotFound(String),
    #[error("Wrong password for alias: {0}")]
    WrongPassword(String),
    #[error("Leaf certificate could not be parsed: {0}")]
    InvalidCertificate(#[source] DecodeError),
    #[error("Public key of the {0} private key is not available")]
    PublicKeyUnavailable(KeyAlgorithm),
    #[error("The {key_algorithm} private key does not match the leaf certificate public key")]
    KeyMismatch { key_algorithm: KeyAlgorithm },
}
