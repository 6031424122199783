#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEncoding {
    /// RSA-only `RSAPrivateKey`.
    Pkcs1,
    /// `PrivateKeyInfo`, carries its algorithm identifier.
    Pkcs8,
    /// RFC 5915 `ECPrivateKey`.
    Sec1,
}
