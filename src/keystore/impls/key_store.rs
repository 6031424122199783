use crate::credentials::structs::certificate_chain::CertificateChain;
use crate::credentials::structs::private_key::PrivateKey;
use crate::keystore::enums::key_store_error::KeyStoreError;
use crate::keystore::structs::key_password::KeyPassword;
use crate::keystore::structs::key_store::KeyStore;
use crate::keystore::structs::key_store_entry::KeyStoreEntry;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read();
        f.debug_struct("KeyStore")
            .field("entries_count", &entries.len())
            .field("aliases", &entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for KeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore {
    pub fn new() -> Self {
        Self {
            entries: parking_lot::RwLock::new(HashMap::new()),
        }
    }

    /// Stores `private_key` and `certificate_chain` under `alias`, replacing
    /// any previous entry. The key must match the leaf certificate.
    pub fn set_key_entry(
        &self,
        alias: &str,
        private_key: PrivateKey,
        password: &KeyPassword,
        certificate_chain: CertificateChain,
    ) -> Result<(), KeyStoreError> {
        Self::verify_key_pair(&private_key, &certificate_chain)?;
        let entry = KeyStoreEntry {
            alias: alias.to_string(),
            certificate_chain,
            created_at: chrono::Utc::now(),
            private_key,
            password: password.clone(),
        };
        if self.entries.write().insert(alias.to_string(), Arc::new(entry)).is_some() {
            debug!("[KEYSTORE] Replaced existing entry {}", alias);
        }
        Ok(())
    }

    pub fn get_key_entry(
        &self,
        alias: &str,
        password: &KeyPassword,
    ) -> Result<Arc<KeyStoreEntry>, KeyStoreError> {
        let entry = self
            .entries
            .read()
            .get(alias)
            .cloned()
            .ok_or_else(|| KeyStoreError::AliasNotFound(alias.to_string()))?;
        if !entry.password.matches(password) {
            return Err(KeyStoreError::WrongPassword(alias.to_string()));
        }
        Ok(entry)
    }

    /// Certificates are public, so no password is required.
    pub fn get_certificate_chain(&self, alias: &str) -> Option<CertificateChain> {
        self.entries
            .read()
            .get(alias)
            .map(|entry| entry.certificate_chain.clone())
    }

    pub fn contains_alias(&self, alias: &str) -> bool {
        self.entries.read().contains_key(alias)
    }

    pub fn aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.entries.read().keys().cloned().collect();
        aliases.sort();
        aliases
    }

    pub fn size(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn delete_entry(&self, alias: &str) -> bool {
        self.entries.write().remove(alias).is_some()
    }

    fn verify_key_pair(
        private_key: &PrivateKey,
        certificate_chain: &CertificateChain,
    ) -> Result<(), KeyStoreError> {
        let leaf_public_key = certificate_chain
            .leaf_public_key()
            .map_err(KeyStoreError::InvalidCertificate)?;
        let signing_key = private_key.signing_key();
        let key_public_key = signing_key
            .public_key()
            .ok_or(KeyStoreError::PublicKeyUnavailable(private_key.algorithm()))?;
        if key_public_key.as_ref() != leaf_public_key.as_slice() {
            return Err(KeyStoreError::KeyMismatch {
                key_algorithm: private_key.algorithm(),
            });
        }
        Ok(())
    }
}
