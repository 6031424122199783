use crate::credentials::enums::decode_error::DecodeError;
use crate::credentials::structs::certificate_chain::CertificateChain;
use rustls::pki_types::CertificateDer;
use std::fs::File;
use std::io::{
    BufRead,
    BufReader
};
use std::path::Path;
use x509_parser::certificate::X509Certificate;

impl std::fmt::Debug for CertificateChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateChain")
            .field("certs_count", &self.certs.len())
            .field("subjects", &self.subjects())
            .finish()
    }
}

impl CertificateChain {
    pub fn from_pem_file<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_pem(&mut reader)
    }

    pub fn from_pem(pem: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = pem;
        Self::read_pem(&mut reader)
    }

    pub fn from_der(certs: Vec<CertificateDer<'static>>) -> Result<Self, DecodeError> {
        if certs.is_empty() {
            return Err(DecodeError::EmptyChain);
        }
        for (index, cert) in certs.iter().enumerate() {
            Self::parse_certificate(index, cert)?;
        }
        Ok(Self { certs })
    }

    fn read_pem(reader: &mut dyn BufRead) -> Result<Self, DecodeError> {
        let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(reader)
            .collect::<Result<Vec<_>, _>>()
            .map_err(DecodeError::Pem)?;
        Self::from_der(certs)
    }

    fn parse_certificate<'a>(index: usize, cert: &'a CertificateDer<'_>) -> Result<X509Certificate<'a>, DecodeError> {
        match x509_parser::parse_x509_certificate(cert.as_ref()) {
            Ok((rest, parsed)) if rest.is_empty() => Ok(parsed),
            Ok(_) => Err(DecodeError::InvalidCertificate {
                index,
                message: "trailing data after certificate".to_string(),
            }),
            Err(e) => Err(DecodeError::InvalidCertificate {
                index,
                message: e.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.certs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }

    /// The end-entity certificate. Chains are never empty.
    pub fn leaf(&self) -> &CertificateDer<'static> {
        &self.certs[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CertificateDer<'static>> {
        self.certs.iter()
    }

    pub fn as_slice(&self) -> &[CertificateDer<'static>] {
        &self.certs
    }

    pub fn to_vec(&self) -> Vec<CertificateDer<'static>> {
        self.certs.clone()
    }

    /// DER of the leaf's `SubjectPublicKeyInfo`.
    pub fn leaf_public_key(&self) -> Result<Vec<u8>, DecodeError> {
        let leaf = Self::parse_certificate(0, self.leaf())?;
        Ok(leaf.public_key().raw.to_vec())
    }

    pub fn subjects(&self) -> Vec<String> {
        self.certs
            .iter()
            .enumerate()
            .map(|(index, cert)| match Self::parse_certificate(index, cert) {
                Ok(parsed) => parsed.subject().to_string(),
                Err(_) => String::from("<unparsable>"),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a CertificateChain {
    type Item = &'a CertificateDer<'static>;
    type IntoIter = std::slice::Iter<'a, CertificateDer<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.certs.iter()
    }
}
