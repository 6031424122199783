use crate::credentials::enums::credential_error::CredentialError;
use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use crate::credentials::structs::certificate_chain::CertificateChain;
use crate::credentials::structs::credential_bundle::CredentialBundle;
use crate::credentials::structs::private_key::PrivateKey;
use crate::keystore::structs::key_password::KeyPassword;
use crate::keystore::structs::key_store::KeyStore;
use crate::keystore::structs::key_store_entry::KeyStoreEntry;
use log::debug;
use rustls::sign::CertifiedKey;
use std::path::PathBuf;
use std::sync::Arc;

/// Alias of the single entry every bundle's keystore holds.
pub const KEY_ALIAS: &str = "alias";

/// Source label used for bundles built from in-memory PEM.
pub const IN_MEMORY_SOURCE: &str = "<in-memory>";

impl std::fmt::Debug for CredentialBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialBundle")
            .field("alias", &KEY_ALIAS)
            .field("entries", &self.key_store.size())
            .field("key_password", &self.key_password)
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CredentialBundle {
    /// Builds a fresh single-entry keystore around `private_key` and
    /// `certificate_chain`, protected by a newly generated password.
    pub fn from_parts(
        certificate_chain: CertificateChain,
        private_key: PrivateKey,
        cert_path: &str,
        key_path: &str,
    ) -> Result<Self, CredentialError> {
        let key_password = KeyPassword::generate();
        let key_store = KeyStore::new();
        key_store.set_key_entry(KEY_ALIAS, private_key, &key_password, certificate_chain)?;
        debug!("[CREDENTIALS] Key store constructed for {}", cert_path);
        Ok(Self {
            key_store,
            key_password,
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    /// Builds a bundle from PEM held in memory, e.g. read from a secret store.
    pub fn from_pem(
        cert_pem: &[u8],
        key_pem: &[u8],
        key_algorithm: Option<KeyAlgorithm>,
    ) -> Result<Self, CredentialError> {
        let certificate_chain = CertificateChain::from_pem(cert_pem).map_err(|source| {
            CredentialError::CertificateDecodeError {
                path: PathBuf::from(IN_MEMORY_SOURCE),
                source,
            }
        })?;
        let private_key = PrivateKey::decode(key_pem, key_algorithm).map_err(|source| {
            CredentialError::PrivateKeyDecodeError {
                path: PathBuf::from(IN_MEMORY_SOURCE),
                source,
            }
        })?;
        Self::from_parts(certificate_chain, private_key, IN_MEMORY_SOURCE, IN_MEMORY_SOURCE)
    }

    pub fn alias(&self) -> &'static str {
        KEY_ALIAS
    }

    pub fn key_password(&self) -> &KeyPassword {
        &self.key_password
    }

    /// Number of keystore entries, always one.
    pub fn size(&self) -> usize {
        self.key_store.size()
    }

    pub fn aliases(&self) -> Vec<String> {
        self.key_store.aliases()
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.key_store.contains_alias(alias)
    }

    /// Looks up `alias` the way a keystore consumer would, checking `password`.
    pub fn get_key_entry(&self, alias: &str, password: &KeyPassword) -> Result<Arc<KeyStoreEntry>, CredentialError> {
        Ok(self.key_store.get_key_entry(alias, password)?)
    }

    pub fn entry(&self) -> Result<Arc<KeyStoreEntry>, CredentialError> {
        self.get_key_entry(KEY_ALIAS, &self.key_password)
    }

    pub fn certificate_chain(&self) -> Result<CertificateChain, CredentialError> {
        Ok(self.entry()?.certificate_chain.clone())
    }

    pub fn private_key(&self) -> Result<PrivateKey, CredentialError> {
        Ok(self.entry()?.private_key().clone())
    }

    pub fn certified_key(&self) -> Result<Arc<CertifiedKey>, CredentialError> {
        Ok(Arc::new(self.entry()?.certified_key()))
    }
}
