use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Directory every other credential path is resolved against.
    pub base_dir: String,
    pub ssl_dir: String,
    /// Overrides `<thing>-certificate.pem.crt` when non-empty.
    pub certificate_file: String,
    /// Overrides `<thing>-private.pem.key` when non-empty.
    pub private_key_file: String,
    /// Hint for bare keys: `RSA`, `EC`, `ED25519`, or empty.
    pub key_algorithm: String,
    /// PEM trust anchors; empty uses the bundled webpki roots.
    pub ca_file: String,
}
