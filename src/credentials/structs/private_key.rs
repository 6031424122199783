use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use crate::credentials::enums::key_encoding::KeyEncoding;
use rustls::pki_types::PrivateKeyDer;
use rustls::sign::SigningKey;
use std::sync::Arc;

/// A decoded private key.
///
/// The DER is kept as read so it can be handed to TLS stacks unchanged; the
/// signing key is the `rustls` view of the same material.
pub struct PrivateKey {
    pub(crate) der: PrivateKeyDer<'static>,
    pub(crate) encoding: KeyEncoding,
    pub(crate) algorithm: KeyAlgorithm,
    pub(crate) signing_key: Arc<dyn SigningKey>,
}
