use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialLoader {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub key_algorithm: Option<KeyAlgorithm>,
}
