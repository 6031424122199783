use crate::provisioning::enums::provisioning_error::ProvisioningError;
use crate::provisioning::structs::key_pair::KeyPair;
use crate::provisioning::structs::keys_and_certificate::KeysAndCertificate;
use base64::prelude::*;
use std::path::Path;

pub const ENV_CERTIFICATE_PEM: &str = "IOT_CERTIFICATE_PEM";
pub const ENV_PRIVATE_KEY_PEM: &str = "IOT_PRIVATE_KEY_PEM";
pub const ENV_CERTIFICATE_ID: &str = "IOT_CERTIFICATE_ID";

const PEM_BEGIN: &str = "-----BEGIN ";

impl KeysAndCertificate {
    pub fn from_json(data: &str) -> Result<Self, ProvisioningError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ProvisioningError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_env() -> Result<Self, ProvisioningError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `IOT_CERTIFICATE_PEM`, `IOT_PRIVATE_KEY_PEM` and the optional
    /// `IOT_CERTIFICATE_ID` through `lookup`.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ProvisioningError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ProvisioningError::MissingVariable(key.to_string()))
        };
        let certificate_pem = decode_pem_value(ENV_CERTIFICATE_PEM, &required(ENV_CERTIFICATE_PEM)?)?;
        let private_key = decode_pem_value(ENV_PRIVATE_KEY_PEM, &required(ENV_PRIVATE_KEY_PEM)?)?;
        Ok(Self {
            certificate_id: lookup(ENV_CERTIFICATE_ID).filter(|value| !value.is_empty()),
            certificate_arn: None,
            certificate_pem,
            key_pair: KeyPair {
                public_key: None,
                private_key,
            },
        })
    }
}

/// Returns `value` unchanged if it is PEM, otherwise decodes it as base64 PEM.
pub fn decode_pem_value(variable: &str, value: &str) -> Result<String, ProvisioningError> {
    if value.contains(PEM_BEGIN) {
        return Ok(value.to_string());
    }
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = |message: String| ProvisioningError::InvalidEncoding {
        variable: variable.to_string(),
        message,
    };
    let bytes = BASE64_STANDARD.decode(compact).map_err(|e| invalid(e.to_string()))?;
    let pem = String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?;
    if !pem.contains(PEM_BEGIN) {
        return Err(invalid(String::from("decoded value has no PEM header")));
    }
    Ok(pem)
}
