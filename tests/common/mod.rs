#![allow(dead_code)]
use iotcore_keystore::config::structs::configuration::Configuration;
use rcgen::{
    CertificateParams,
    DnType,
    KeyPair
};
use std::path::{
    Path,
    PathBuf
};
use tempfile::TempDir;

pub const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

pub fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES).join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture(name)).unwrap()
}

pub fn copy_fixture(dir: &Path, name: &str, target: &str) -> PathBuf {
    let path = dir.join(target);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::copy(fixture(name), &path).unwrap();
    path
}

/// Configuration whose credentials resolve inside `dir`.
pub fn create_test_config(dir: &TempDir) -> Configuration {
    let mut config = Configuration::init();
    config.credentials.base_dir = dir.path().to_string_lossy().into_owned();
    config
}

/// A leaf certificate for a fresh ECDSA key followed by `extra`
/// self-signed certificates, as one PEM document.
pub fn generate_chain(extra: usize) -> (String, String) {
    let key_pair = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(vec![String::from("localhost")]).unwrap();
    params.distinguished_name.push(DnType::CommonName, "Leaf 0");
    let mut pem = params.self_signed(&key_pair).unwrap().pem();
    for index in 1..=extra {
        let ca_key = KeyPair::generate().unwrap();
        let mut ca_params = CertificateParams::new(Vec::<String>::new()).unwrap();
        ca_params.distinguished_name.push(DnType::CommonName, format!("Chain {}", index));
        pem.push_str(&ca_params.self_signed(&ca_key).unwrap().pem());
    }
    (pem, key_pair.serialize_pem())
}
