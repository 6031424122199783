use crate::credentials::structs::private_key::PrivateKey;
use crate::keystore::structs::key_store_entry::KeyStoreEntry;
use rustls::sign::CertifiedKey;

impl std::fmt::Debug for KeyStoreEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStoreEntry")
            .field("alias", &self.alias)
            .field("certificate_chain", &self.certificate_chain)
            .field("private_key", &self.private_key)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl KeyStoreEntry {
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn certified_key(&self) -> CertifiedKey {
        CertifiedKey::new(self.certificate_chain.to_vec(), self.private_key.signing_key())
    }
}
