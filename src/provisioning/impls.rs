pub mod key_pair;
pub mod keys_and_certificate;
