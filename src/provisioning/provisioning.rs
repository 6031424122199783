use crate::common::common::{
    delete_file,
    write_file,
    write_private_file
};
use crate::credentials::structs::credential_bundle::CredentialBundle;
use crate::provisioning::enums::provisioning_error::ProvisioningError;
use crate::provisioning::structs::key_pair::KeyPair;
use crate::provisioning::structs::keys_and_certificate::KeysAndCertificate;
use log::info;
use rcgen::{
    CertificateParams,
    DnType
};
use std::path::{
    Path,
    PathBuf
};

/// Validates `keys` and writes them to `cert_path` and `key_path`, replacing
/// existing files.
///
/// Both files are staged next to their targets and renamed into place only
/// once both writes succeed, so a failed write leaves the old pair intact.
/// The key file is owner-only on unix from creation.
#[tracing::instrument(level = "debug", skip(keys))]
pub fn provision_credentials(
    keys: &KeysAndCertificate,
    cert_path: &Path,
    key_path: &Path,
) -> Result<(), ProvisioningError> {
    CredentialBundle::from_pem(
        keys.certificate_pem.as_bytes(),
        keys.key_pair.private_key.as_bytes(),
        None,
    )?;
    if let Some(certificate_id) = &keys.certificate_id {
        info!("[PROVISION] Provisioning certificate {}", certificate_id);
    }

    let staged_cert = staging_path(cert_path);
    let staged_key = staging_path(key_path);
    let staged = write_file(&staged_cert, &keys.certificate_pem)
        .and_then(|_| write_private_file(&staged_key, &keys.key_pair.private_key))
        .and_then(|_| std::fs::rename(&staged_key, key_path))
        .and_then(|_| std::fs::rename(&staged_cert, cert_path));
    if let Err(error) = staged {
        delete_file(&staged_cert);
        delete_file(&staged_key);
        return Err(error.into());
    }

    info!("[PROVISION] Certificate written to {}", cert_path.display());
    info!("[PROVISION] Private key written to {}", key_path.display());
    Ok(())
}

/// Generates an ECDSA P-256 self-signed certificate for `thing_name`, valid
/// for `localhost` and `domain`. Only meant for development endpoints.
pub fn generate_self_signed(thing_name: &str, domain: &str) -> Result<KeysAndCertificate, ProvisioningError> {
    info!("[CERTGEN] Requesting to generate a self-signed key and certificate for {}", thing_name);
    let mut subject_alt_names = vec![String::from("localhost")];
    if domain != "localhost" {
        subject_alt_names.push(domain.to_string());
    }
    let key_pair = rcgen::KeyPair::generate()?;
    let mut params = CertificateParams::new(subject_alt_names)?;
    params.distinguished_name.push(DnType::CommonName, thing_name);
    let cert = params.self_signed(&key_pair)?;
    Ok(KeysAndCertificate {
        certificate_id: None,
        certificate_arn: None,
        certificate_pem: cert.pem(),
        key_pair: KeyPair {
            public_key: Some(key_pair.public_key_pem()),
            private_key: key_pair.serialize_pem(),
        },
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".staged");
    path.with_file_name(name)
}
