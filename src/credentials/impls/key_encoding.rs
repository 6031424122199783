use crate::credentials::enums::key_encoding::KeyEncoding;

impl KeyEncoding {
    pub fn is_self_describing(&self) -> bool {
        matches!(self, KeyEncoding::Pkcs8)
    }
}

impl std::fmt::Display for KeyEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyEncoding::Pkcs1 => write!(f, "PKCS#1"),
            KeyEncoding::Pkcs8 => write!(f, "PKCS#8"),
            KeyEncoding::Sec1 => write!(f, "SEC1"),
        }
    }
}
