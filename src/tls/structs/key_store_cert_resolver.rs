use rustls::sign::CertifiedKey;
use std::sync::Arc;

/// Presents the keystore's certificate chain whenever the server asks for a
/// client certificate the key can sign for.
pub struct KeyStoreCertResolver {
    pub(crate) certified_key: Arc<CertifiedKey>,
}
