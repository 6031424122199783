use crate::credentials::enums::decode_error::DecodeError;
use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use pkcs8::ObjectIdentifier;
use rustls::SignatureAlgorithm;
use std::str::FromStr;

const OID_RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const OID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const OID_ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

impl KeyAlgorithm {
    /// Maps a PKCS#8 `AlgorithmIdentifier` OID to the key algorithm.
    pub fn from_oid(oid: &ObjectIdentifier) -> Option<KeyAlgorithm> {
        if *oid == OID_RSA_ENCRYPTION {
            Some(KeyAlgorithm::Rsa)
        } else if *oid == OID_EC_PUBLIC_KEY {
            Some(KeyAlgorithm::Ec)
        } else if *oid == OID_ED25519 {
            Some(KeyAlgorithm::Ed25519)
        } else {
            None
        }
    }

    pub fn from_signature_algorithm(algorithm: SignatureAlgorithm) -> Option<KeyAlgorithm> {
        match algorithm {
            SignatureAlgorithm::RSA => Some(KeyAlgorithm::Rsa),
            SignatureAlgorithm::ECDSA => Some(KeyAlgorithm::Ec),
            SignatureAlgorithm::ED25519 => Some(KeyAlgorithm::Ed25519),
            _ => None,
        }
    }

    /// Parses an optional hint, treating an empty string as "no hint".
    pub fn parse_hint(value: &str) -> Result<Option<KeyAlgorithm>, DecodeError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for KeyAlgorithm {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RSA" => Ok(KeyAlgorithm::Rsa),
            "EC" | "ECDSA" => Ok(KeyAlgorithm::Ec),
            "ED25519" => Ok(KeyAlgorithm::Ed25519),
            _ => Err(DecodeError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyAlgorithm::Rsa => write!(f, "RSA"),
            KeyAlgorithm::Ec => write!(f, "EC"),
            KeyAlgorithm::Ed25519 => write!(f, "Ed25519"),
        }
    }
}
