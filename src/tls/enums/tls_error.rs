use crate::credentials::enums::credential_error::CredentialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TlsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TLS error: {0}")]
    Rustls(#[from] rustls::Error),
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
    #[error("Invalid server name: {0}")]
    InvalidServerName(String),
    #[error("No root certificates found in {0}")]
    NoRootCertificates(String),
    #[error("Could not resolve address: {0}")]
    AddressResolution(String),
}
