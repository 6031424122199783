use crate::credentials::enums::decode_error::DecodeError;
use crate::keystore::enums::key_store_error::KeyStoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Credential file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to decode certificate file {}: {source}", .path.display())]
    CertificateDecodeError {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("Failed to decode private key file {}: {source}", .path.display())]
    PrivateKeyDecodeError {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("Failed to construct key store: {0}")]
    KeyStoreConstructionError(#[from] KeyStoreError),
}
