use crate::config::structs::configuration::Configuration;
use crate::credentials::credentials::{
    check_credentials_exist,
    load_credential_bundle
};
use crate::credentials::enums::credential_error::CredentialError;
use crate::credentials::enums::decode_error::DecodeError;
use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use crate::credentials::structs::credential_bundle::CredentialBundle;
use crate::credentials::structs::credential_loader::CredentialLoader;
use std::path::{
    Path,
    PathBuf
};

impl CredentialLoader {
    pub const CERTIFICATE_SUFFIX: &'static str = "-certificate.pem.crt";
    pub const PRIVATE_KEY_SUFFIX: &'static str = "-private.pem.key";

    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(cert_path: P, key_path: Q) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
            key_algorithm: None,
        }
    }

    /// Uses the AWS IoT naming convention inside `ssl_dir`:
    /// `<thing>-certificate.pem.crt` and `<thing>-private.pem.key`.
    pub fn for_thing<P: AsRef<Path>>(ssl_dir: P, thing_name: &str) -> Self {
        let ssl_dir = ssl_dir.as_ref();
        Self::new(
            ssl_dir.join(format!("{}{}", thing_name, Self::CERTIFICATE_SUFFIX)),
            ssl_dir.join(format!("{}{}", thing_name, Self::PRIVATE_KEY_SUFFIX)),
        )
    }

    /// Resolves the credential paths against the configured base directory.
    /// Explicit file overrides win over the thing naming convention.
    pub fn from_config(config: &Configuration) -> Result<Self, DecodeError> {
        let credentials = &config.credentials;
        let base_dir = PathBuf::from(&credentials.base_dir);
        let mut loader = Self::for_thing(base_dir.join(&credentials.ssl_dir), &config.device.thing_name);
        if !credentials.certificate_file.is_empty() {
            loader.cert_path = base_dir.join(&credentials.certificate_file);
        }
        if !credentials.private_key_file.is_empty() {
            loader.key_path = base_dir.join(&credentials.private_key_file);
        }
        loader.key_algorithm = KeyAlgorithm::parse_hint(&credentials.key_algorithm)?;
        Ok(loader)
    }

    pub fn with_key_algorithm(mut self, key_algorithm: Option<KeyAlgorithm>) -> Self {
        self.key_algorithm = key_algorithm;
        self
    }

    pub fn credentials_exist(&self) -> bool {
        check_credentials_exist(&self.cert_path, &self.key_path)
    }

    pub fn load(&self) -> Result<CredentialBundle, CredentialError> {
        load_credential_bundle(&self.cert_path, &self.key_path, self.key_algorithm)
    }
}
