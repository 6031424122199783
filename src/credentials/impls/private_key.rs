use crate::credentials::enums::decode_error::DecodeError;
use crate::credentials::enums::key_algorithm::{
    KeyAlgorithm,
    DEFAULT_KEY_ALGORITHM
};
use crate::credentials::enums::key_encoding::KeyEncoding;
use crate::credentials::structs::private_key::PrivateKey;
use rustls::pki_types::{
    PrivateKeyDer,
    PrivatePkcs1KeyDer,
    PrivatePkcs8KeyDer,
    PrivateSec1KeyDer
};
use pkcs8::PrivateKeyInfo;
use rustls::SignatureScheme;
use rustls_pemfile::Item;
use std::path::Path;
use std::sync::Arc;

const PEM_BEGIN: &[u8] = b"-----BEGIN ";

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("algorithm", &self.algorithm)
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl Clone for PrivateKey {
    fn clone(&self) -> Self {
        Self {
            der: self.der.clone_key(),
            encoding: self.encoding,
            algorithm: self.algorithm,
            signing_key: Arc::clone(&self.signing_key),
        }
    }
}

impl PrivateKey {
    pub fn from_file<P: AsRef<Path>>(path: P, hint: Option<KeyAlgorithm>) -> Result<Self, DecodeError> {
        let data = std::fs::read(path)?;
        Self::decode(&data, hint)
    }

    /// Decodes PEM or raw DER key material.
    ///
    /// PEM labels decide the encoding. Raw DER is inspected: a PKCS#8
    /// `PrivateKeyInfo` is self-describing, anything else is a bare key read
    /// as `hint`, or as [`DEFAULT_KEY_ALGORITHM`] (RSA, PKCS#1) when no hint
    /// is given. A hint that contradicts a self-describing key is an error.
    pub fn decode(data: &[u8], hint: Option<KeyAlgorithm>) -> Result<Self, DecodeError> {
        let der = if data.windows(PEM_BEGIN.len()).any(|window| window == PEM_BEGIN) {
            Self::read_pem(data)?
        } else {
            Self::read_der(data, hint)?
        };
        Self::from_der(der, hint)
    }

    pub fn from_der(der: PrivateKeyDer<'static>, hint: Option<KeyAlgorithm>) -> Result<Self, DecodeError> {
        let encoding = match &der {
            PrivateKeyDer::Pkcs1(_) => KeyEncoding::Pkcs1,
            PrivateKeyDer::Pkcs8(_) => KeyEncoding::Pkcs8,
            PrivateKeyDer::Sec1(_) => KeyEncoding::Sec1,
            _ => return Err(DecodeError::UnsupportedKey("unknown private key encoding".to_string())),
        };
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&der)
            .map_err(|e| DecodeError::UnsupportedKey(e.to_string()))?;
        let algorithm = KeyAlgorithm::from_signature_algorithm(signing_key.algorithm())
            .ok_or_else(|| DecodeError::UnsupportedKey(format!("{:?}", signing_key.algorithm())))?;
        if let Some(expected) = hint
            && expected != algorithm
        {
            return Err(DecodeError::AlgorithmMismatch { expected, found: algorithm });
        }
        Ok(Self {
            der,
            encoding,
            algorithm,
            signing_key,
        })
    }

    fn read_pem(data: &[u8]) -> Result<PrivateKeyDer<'static>, DecodeError> {
        let mut reader = data;
        for item in rustls_pemfile::read_all(&mut reader) {
            match item.map_err(DecodeError::Pem)? {
                Item::Pkcs1Key(key) => return Ok(PrivateKeyDer::Pkcs1(key)),
                Item::Pkcs8Key(key) => return Ok(PrivateKeyDer::Pkcs8(key)),
                Item::Sec1Key(key) => return Ok(PrivateKeyDer::Sec1(key)),
                _ => continue,
            }
        }
        Err(DecodeError::NoPrivateKey)
    }

    fn read_der(data: &[u8], hint: Option<KeyAlgorithm>) -> Result<PrivateKeyDer<'static>, DecodeError> {
        if data.is_empty() {
            return Err(DecodeError::NoPrivateKey);
        }
        if let Ok(info) = PrivateKeyInfo::try_from(data) {
            let oid = info.algorithm.oid;
            let algorithm = KeyAlgorithm::from_oid(&oid)
                .ok_or_else(|| DecodeError::UnsupportedAlgorithm(oid.to_string()))?;
            if let Some(expected) = hint
                && expected != algorithm
            {
                return Err(DecodeError::AlgorithmMismatch { expected, found: algorithm });
            }
            return Ok(PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(data.to_vec())));
        }
        match hint.unwrap_or(DEFAULT_KEY_ALGORITHM) {
            KeyAlgorithm::Rsa => Ok(PrivateKeyDer::Pkcs1(PrivatePkcs1KeyDer::from(data.to_vec()))),
            KeyAlgorithm::Ec => Ok(PrivateKeyDer::Sec1(PrivateSec1KeyDer::from(data.to_vec()))),
            KeyAlgorithm::Ed25519 => Err(DecodeError::UnsupportedKey(
                "Ed25519 keys are only accepted PKCS#8 encoded".to_string(),
            )),
        }
    }

    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    pub fn encoding(&self) -> KeyEncoding {
        self.encoding
    }

    pub fn der(&self) -> &PrivateKeyDer<'static> {
        &self.der
    }

    pub fn signing_key(&self) -> Arc<dyn rustls::sign::SigningKey> {
        Arc::clone(&self.signing_key)
    }

    /// Signs `message` with the first of `schemes` this key supports.
    pub fn sign(&self, schemes: &[SignatureScheme], message: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let signer = self
            .signing_key
            .choose_scheme(schemes)
            .ok_or_else(|| DecodeError::UnsupportedKey(format!("no usable scheme among {:?}", schemes)))?;
        signer
            .sign(message)
            .map_err(|e| DecodeError::UnsupportedKey(e.to_string()))
    }
}
