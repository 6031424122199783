mod common;

use common::{copy_fixture, create_test_config, fixture, generate_chain, read_fixture};
use iotcore_keystore::credentials::credentials::{check_credentials_exist, load_credential_bundle};
use iotcore_keystore::credentials::enums::credential_error::CredentialError;
use iotcore_keystore::credentials::enums::decode_error::DecodeError;
use iotcore_keystore::credentials::enums::key_algorithm::KeyAlgorithm;
use iotcore_keystore::credentials::enums::key_encoding::KeyEncoding;
use iotcore_keystore::credentials::structs::credential_bundle::CredentialBundle;
use iotcore_keystore::credentials::structs::credential_loader::CredentialLoader;
use iotcore_keystore::keystore::enums::key_store_error::KeyStoreError;
use proptest::prelude::*;
use rustls::SignatureScheme;
use tempfile::TempDir;

#[test]
fn test_load_rsa_chain_with_pkcs1_key() {
    let bundle = load_credential_bundle(fixture("rsa_chain.pem"), fixture("rsa_key_pkcs1.pem"), None).unwrap();
    assert_eq!(bundle.size(), 1);
    assert!(bundle.contains_alias("alias"));
    let chain = bundle.certificate_chain().unwrap();
    assert_eq!(chain.len(), 2);
    let key = bundle.private_key().unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Rsa);
    assert_eq!(key.encoding(), KeyEncoding::Pkcs1);
}

#[test]
fn test_chain_round_trip_is_byte_equal() {
    let bundle = load_credential_bundle(fixture("rsa_chain.pem"), fixture("rsa_key_pkcs8.pem"), None).unwrap();
    let expected: Vec<Vec<u8>> = rustls_pemfile::certs(&mut read_fixture("rsa_chain.pem").as_slice())
        .map(|cert| cert.unwrap().as_ref().to_vec())
        .collect();
    let loaded: Vec<Vec<u8>> = bundle
        .certificate_chain()
        .unwrap()
        .iter()
        .map(|cert| cert.as_ref().to_vec())
        .collect();
    assert_eq!(loaded, expected);
}

#[test]
fn test_pkcs1_and_pkcs8_sign_identically() {
    let pkcs1 = load_credential_bundle(fixture("rsa_cert.pem"), fixture("rsa_key_pkcs1.pem"), None).unwrap();
    let pkcs8 = load_credential_bundle(fixture("rsa_cert.pem"), fixture("rsa_key_pkcs8.pem"), None).unwrap();
    let schemes = [SignatureScheme::RSA_PKCS1_SHA256];
    let message = b"$aws/things/TestSimpleIot/shadow/update";
    let first = pkcs1.private_key().unwrap().sign(&schemes, message).unwrap();
    let second = pkcs8.private_key().unwrap().sign(&schemes, message).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_two_loads_have_independent_passwords() {
    let first = load_credential_bundle(fixture("rsa_chain.pem"), fixture("rsa_key_pkcs1.pem"), None).unwrap();
    let second = load_credential_bundle(fixture("rsa_chain.pem"), fixture("rsa_key_pkcs1.pem"), None).unwrap();
    assert_ne!(first.key_password(), second.key_password());
    assert_eq!(first.certificate_chain().unwrap(), second.certificate_chain().unwrap());
    assert_eq!(
        first.private_key().unwrap().der().secret_der(),
        second.private_key().unwrap().der().secret_der()
    );
    let wrong = first.get_key_entry("alias", second.key_password());
    assert!(matches!(
        wrong,
        Err(CredentialError::KeyStoreConstructionError(KeyStoreError::WrongPassword(_)))
    ));
}

#[test]
fn test_missing_certificate_is_reported_before_key() {
    let result = load_credential_bundle(fixture("absent-certificate.pem.crt"), fixture("rsa_key_pkcs1.pem"), None);
    assert!(matches!(result, Err(CredentialError::FileNotFound(path)) if path.ends_with("absent-certificate.pem.crt")));
    let result = load_credential_bundle(fixture("absent-certificate.pem.crt"), fixture("absent-private.pem.key"), None);
    assert!(matches!(result, Err(CredentialError::FileNotFound(path)) if path.ends_with("absent-certificate.pem.crt")));
}

#[test]
fn test_missing_key() {
    let result = load_credential_bundle(fixture("rsa_cert.pem"), fixture("absent-private.pem.key"), None);
    assert!(matches!(result, Err(CredentialError::FileNotFound(path)) if path.ends_with("absent-private.pem.key")));
}

#[test]
fn test_truncated_certificate() {
    let result = load_credential_bundle(fixture("truncated_cert.pem"), fixture("rsa_key_pkcs1.pem"), None);
    assert!(matches!(result, Err(CredentialError::CertificateDecodeError { .. })));
}

#[test]
fn test_empty_certificate_file() {
    let temp_dir = TempDir::new().unwrap();
    let cert_path = temp_dir.path().join("empty.pem");
    std::fs::write(&cert_path, "").unwrap();
    let result = load_credential_bundle(&cert_path, fixture("rsa_key_pkcs1.pem"), None);
    assert!(matches!(
        result,
        Err(CredentialError::CertificateDecodeError { source: DecodeError::EmptyChain, .. })
    ));
}

#[test]
fn test_garbage_key() {
    let result = load_credential_bundle(fixture("rsa_cert.pem"), fixture("garbage_key.pem"), None);
    assert!(matches!(result, Err(CredentialError::PrivateKeyDecodeError { .. })));
}

#[test]
fn test_bare_der_key_defaults_to_rsa() {
    let bundle = load_credential_bundle(fixture("rsa_cert.pem"), fixture("rsa_key_pkcs1.der"), None).unwrap();
    let key = bundle.private_key().unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Rsa);
    assert_eq!(key.encoding(), KeyEncoding::Pkcs1);
}

#[test]
fn test_pkcs8_der_key() {
    let bundle = load_credential_bundle(fixture("rsa_cert.pem"), fixture("rsa_key_pkcs8.der"), None).unwrap();
    assert_eq!(bundle.private_key().unwrap().encoding(), KeyEncoding::Pkcs8);
}

#[test]
fn test_hint_mismatch_is_a_key_error() {
    let result = load_credential_bundle(fixture("rsa_cert.pem"), fixture("rsa_key_pkcs8.pem"), Some(KeyAlgorithm::Ec));
    assert!(matches!(
        result,
        Err(CredentialError::PrivateKeyDecodeError { source: DecodeError::AlgorithmMismatch { .. }, .. })
    ));
}

#[test]
fn test_ec_certificate_with_rsa_key() {
    let result = load_credential_bundle(fixture("ec_cert.pem"), fixture("rsa_key_pkcs1.pem"), None);
    assert!(matches!(
        result,
        Err(CredentialError::KeyStoreConstructionError(KeyStoreError::KeyMismatch { .. }))
    ));
}

#[test]
fn test_ec_sec1_and_pkcs8() {
    for key in ["ec_key_sec1.pem", "ec_key_pkcs8.pem"] {
        let bundle = load_credential_bundle(fixture("ec_cert.pem"), fixture(key), None).unwrap();
        assert_eq!(bundle.private_key().unwrap().algorithm(), KeyAlgorithm::Ec);
    }
}

#[test]
fn test_load_ed25519_pkcs8_from_files() {
    let temp_dir = TempDir::new().unwrap();
    let key_pair = rcgen::KeyPair::generate_for(&rcgen::PKCS_ED25519).unwrap();
    let mut params = rcgen::CertificateParams::new(vec![String::from("localhost")]).unwrap();
    params.distinguished_name.push(rcgen::DnType::CommonName, "TestSimpleIot");
    let cert = params.self_signed(&key_pair).unwrap();
    let cert_path = temp_dir.path().join("ed25519-certificate.pem.crt");
    let key_path = temp_dir.path().join("ed25519-private.pem.key");
    std::fs::write(&cert_path, cert.pem()).unwrap();
    std::fs::write(&key_path, key_pair.serialize_pem()).unwrap();

    let bundle = load_credential_bundle(&cert_path, &key_path, Some(KeyAlgorithm::Ed25519)).unwrap();
    let key = bundle.private_key().unwrap();
    assert_eq!(key.algorithm(), KeyAlgorithm::Ed25519);
    assert_eq!(key.encoding(), KeyEncoding::Pkcs8);
    let signature = key.sign(&[SignatureScheme::ED25519], b"shadow").unwrap();
    assert_eq!(signature.len(), 64);
}

#[test]
fn test_debug_never_shows_password() {
    let bundle = load_credential_bundle(fixture("rsa_chain.pem"), fixture("rsa_key_pkcs1.pem"), None).unwrap();
    let secret = bundle.key_password().expose_secret().to_string();
    assert!(!format!("{:?}", bundle).contains(&secret));
    assert!(!format!("{:?}", bundle.entry().unwrap()).contains(&secret));
}

#[test]
fn test_error_messages_name_the_path() {
    let error = load_credential_bundle(fixture("truncated_cert.pem"), fixture("rsa_key_pkcs1.pem"), None).unwrap_err();
    assert!(error.to_string().contains("truncated_cert.pem"));
}

#[test]
fn test_loader_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);
    let loader = CredentialLoader::from_config(&config).unwrap();
    assert!(!loader.credentials_exist());
    copy_fixture(temp_dir.path(), "rsa_chain.pem", "LaidianClient/AWS/ssl/TestSimpleIot-certificate.pem.crt");
    copy_fixture(temp_dir.path(), "rsa_key_pkcs1.pem", "LaidianClient/AWS/ssl/TestSimpleIot-private.pem.key");
    assert!(loader.credentials_exist());
    assert!(check_credentials_exist(&loader.cert_path, &loader.key_path));
    assert_eq!(loader.load().unwrap().certificate_chain().unwrap().len(), 2);
}

#[test]
fn test_loader_explicit_files_and_hint() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&temp_dir);
    config.credentials.certificate_file = String::from("device.crt");
    config.credentials.private_key_file = String::from("device.key");
    config.credentials.key_algorithm = String::from("EC");
    copy_fixture(temp_dir.path(), "ec_cert.pem", "device.crt");
    copy_fixture(temp_dir.path(), "ec_key_sec1.pem", "device.key");
    let loader = CredentialLoader::from_config(&config).unwrap();
    assert_eq!(loader.key_algorithm, Some(KeyAlgorithm::Ec));
    assert!(loader.load().is_ok());
}

#[test]
fn test_bundle_from_in_memory_pem() {
    let (cert, key) = generate_chain(0);
    let bundle = CredentialBundle::from_pem(cert.as_bytes(), key.as_bytes(), None).unwrap();
    assert_eq!(bundle.certificate_chain().unwrap().len(), 1);
}

#[test]
fn test_concurrent_loads_are_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                load_credential_bundle(fixture("rsa_chain.pem"), fixture("rsa_key_pkcs1.pem"), None)
                    .unwrap()
                    .key_password()
                    .expose_secret()
                    .to_string()
            })
        })
        .collect();
    let mut passwords: Vec<String> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    passwords.sort();
    passwords.dedup();
    assert_eq!(passwords.len(), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_chain_length_and_order_preserved(extra in 0usize..5) {
        let temp_dir = TempDir::new().unwrap();
        let (cert, key) = generate_chain(extra);
        let cert_path = temp_dir.path().join("chain.pem");
        let key_path = temp_dir.path().join("key.pem");
        std::fs::write(&cert_path, &cert).unwrap();
        std::fs::write(&key_path, &key).unwrap();
        let bundle = load_credential_bundle(&cert_path, &key_path, None).unwrap();
        let chain = bundle.certificate_chain().unwrap();
        prop_assert_eq!(chain.len(), extra + 1);
        let subjects = chain.subjects();
        prop_assert!(subjects[0].contains("Leaf 0"));
        for (index, subject) in subjects.iter().enumerate().skip(1) {
            let expected = format!("Chain {}", index);
            prop_assert!(subject.contains(&expected));
        }
    }
}
