use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed PEM: {0}")]
    Pem(std::io::Error),
    #[error("No certificates found in file")]
    EmptyChain,
    #[error("Certificate #{index} is not a valid X.509 certificate: {message}")]
    InvalidCertificate { index: usize, message: String },
    #[error("No private key found in file")]
    NoPrivateKey,
    #[error("Unsupported private key: {0}")]
    UnsupportedKey(String),
    #[error("Unsupported key algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Key algorithm mismatch: expected {expected}, found {found}")]
    AlgorithmMismatch {
        expected: KeyAlgorithm,
        found: KeyAlgorithm,
    },
}
