use crate::credentials::enums::credential_error::CredentialError;
use crate::credentials::structs::credential_bundle::CredentialBundle;
use crate::tls::structs::key_store_cert_resolver::KeyStoreCertResolver;
use rustls::client::ResolvesClientCert;
use rustls::sign::CertifiedKey;
use rustls::SignatureScheme;
use std::sync::Arc;

impl std::fmt::Debug for KeyStoreCertResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStoreCertResolver")
            .field("certs_count", &self.certified_key.cert.len())
            .field("algorithm", &self.certified_key.key.algorithm())
            .finish()
    }
}

impl KeyStoreCertResolver {
    pub fn new(bundle: &CredentialBundle) -> Result<Self, CredentialError> {
        Ok(Self {
            certified_key: bundle.certified_key()?,
        })
    }

    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        Arc::clone(&self.certified_key)
    }
}

impl ResolvesClientCert for KeyStoreCertResolver {
    fn resolve(
        &self,
        _root_hint_subjects: &[&[u8]],
        sigschemes: &[SignatureScheme],
    ) -> Option<Arc<CertifiedKey>> {
        self.certified_key.key.choose_scheme(sigschemes)?;
        Some(Arc::clone(&self.certified_key))
    }

    fn has_certs(&self) -> bool {
        true
    }
}
