use crate::keystore::structs::key_password::KeyPassword;
use crate::keystore::structs::key_store::KeyStore;

/// A populated keystore together with the password protecting its entry.
///
/// The bundle lives only in memory; neither the keystore nor the password is
/// ever written out.
pub struct CredentialBundle {
    pub(crate) key_store: KeyStore,
    pub(crate) key_password: KeyPassword,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub cert_path: String,
    pub key_path: String,
}
