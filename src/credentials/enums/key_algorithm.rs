use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

/// Algorithm used to interpret bare (non-PKCS#8) keys when no hint is given.
pub const DEFAULT_KEY_ALGORITHM: KeyAlgorithm = KeyAlgorithm::Rsa;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyAlgorithm {
    Rsa,
    Ec,
    Ed25519,
}
