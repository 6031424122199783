use crate::credentials::enums::credential_error::CredentialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisioningError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid provisioning document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Environment variable {0} is not set")]
    MissingVariable(String),
    #[error("Environment variable {variable} is neither PEM nor base64 encoded PEM: {message}")]
    InvalidEncoding { variable: String, message: String },
    #[error("Certificate generation failed: {0}")]
    CertificateGeneration(#[from] rcgen::Error),
    #[error("Provisioned credentials are not usable: {0}")]
    InvalidCredentials(#[from] CredentialError),
}
