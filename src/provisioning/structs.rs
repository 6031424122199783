/// Key pair returned by `CreateKeysAndCertificate`.
pub mod key_pair;

/// Response of `CreateKeysAndCertificate`.
pub mod keys_and_certificate;
