use rustls::pki_types::CertificateDer;

/// An ordered, non-empty X.509 certificate chain, leaf first.
///
/// Every certificate has been parsed as X.509 when the chain was built, so
/// holders can rely on the DER being well formed.
#[derive(Clone, PartialEq, Eq)]
pub struct CertificateChain {
    pub(crate) certs: Vec<CertificateDer<'static>>,
}
