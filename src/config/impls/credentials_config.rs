use crate::config::structs::credentials_config::CredentialsConfig;
use std::path::PathBuf;

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            base_dir: String::from("."),
            ssl_dir: String::from("LaidianClient/AWS/ssl"),
            certificate_file: String::new(),
            private_key_file: String::new(),
            key_algorithm: String::new(),
            ca_file: String::new(),
        }
    }
}

impl CredentialsConfig {
    pub fn ssl_path(&self) -> PathBuf {
        PathBuf::from(&self.base_dir).join(&self.ssl_dir)
    }

    pub fn ca_path(&self) -> Option<PathBuf> {
        if self.ca_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.base_dir).join(&self.ca_file))
        }
    }
}
