use crate::credentials::structs::certificate_chain::CertificateChain;
use crate::credentials::structs::private_key::PrivateKey;
use crate::keystore::structs::key_password::KeyPassword;

pub struct KeyStoreEntry {
    pub alias: String,
    pub certificate_chain: CertificateChain,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub(crate) private_key: PrivateKey,
    pub(crate) password: KeyPassword,
}
