use crate::common::common::constant_time_eq;
use crate::keystore::structs::key_password::KeyPassword;
use rand::RngExt;
use zeroize::Zeroize;

impl KeyPassword {
    /// Bytes drawn from the CSPRNG per password (128 bits).
    pub const ENTROPY_BYTES: usize = 16;

    /// Generates a password from `ENTROPY_BYTES` of CSPRNG output, hex encoded.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut bytes: Vec<u8> = (0..Self::ENTROPY_BYTES).map(|_| rng.random()).collect();
        let password = hex::encode(&bytes);
        bytes.zeroize();
        Self(password)
    }

    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, other: &KeyPassword) -> bool {
        constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }
}

impl PartialEq for KeyPassword {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for KeyPassword {}

impl std::fmt::Debug for KeyPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyPassword(********)")
    }
}

impl std::fmt::Display for KeyPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("********")
    }
}
