use crate::credentials::enums::credential_error::CredentialError;
use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use crate::credentials::structs::certificate_chain::CertificateChain;
use crate::credentials::structs::credential_bundle::CredentialBundle;
use crate::credentials::structs::private_key::PrivateKey;
use log::info;
use std::path::Path;

/// True only if both files exist. The contents are not inspected.
pub fn check_credentials_exist<P: AsRef<Path>, Q: AsRef<Path>>(cert_path: P, key_path: Q) -> bool {
    let cert_exists = cert_path.as_ref().exists();
    let key_exists = key_path.as_ref().exists();
    info!("[CREDENTIALS] Is certificate file exist: {}", cert_exists);
    info!("[CREDENTIALS] Is private key file exist: {}", key_exists);
    cert_exists && key_exists
}

/// Loads a certificate chain and private key into a fresh
/// [`CredentialBundle`].
///
/// The certificate path is checked before anything else, so a missing
/// certificate is reported without touching the key file. Each call
/// generates a new keystore password.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load_credential_bundle<P: AsRef<Path>, Q: AsRef<Path>>(
    cert_path: P,
    key_path: Q,
    key_algorithm: Option<KeyAlgorithm>,
) -> Result<CredentialBundle, CredentialError> {
    let cert_path = cert_path.as_ref();
    let key_path = key_path.as_ref();
    ensure_file(cert_path)?;
    ensure_file(key_path)?;

    let certificate_chain = CertificateChain::from_pem_file(cert_path).map_err(|source| {
        CredentialError::CertificateDecodeError {
            path: cert_path.to_path_buf(),
            source,
        }
    })?;
    let private_key = PrivateKey::from_file(key_path, key_algorithm).map_err(|source| {
        CredentialError::PrivateKeyDecodeError {
            path: key_path.to_path_buf(),
            source,
        }
    })?;
    info!(
        "[CREDENTIALS] Decoded {} certificate(s) and a {} {} private key",
        certificate_chain.len(),
        private_key.algorithm(),
        private_key.encoding()
    );

    CredentialBundle::from_parts(
        certificate_chain,
        private_key,
        &cert_path.display().to_string(),
        &key_path.display().to_string(),
    )
}

fn ensure_file(path: &Path) -> Result<(), CredentialError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CredentialError::FileNotFound(path.to_path_buf()))
    }
}
