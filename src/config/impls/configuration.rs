use crate::common::common::level_filter;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::credentials_config::CredentialsConfig;
use crate::config::structs::device_config::DeviceConfig;
use crate::config::structs::endpoint_config::EndpointConfig;
use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use regex::Regex;
use std::fs::File;
use std::io::Write;

/// AWS IoT thing name rule.
pub const THING_NAME_REGEX: &str = r"^[a-zA-Z0-9:_-]{1,128}$";

pub const ENV_BASE_DIR: &str = "IOT_BASE_DIR";
pub const ENV_THING_NAME: &str = "IOT_THING_NAME";
pub const ENV_ENDPOINT: &str = "IOT_ENDPOINT";

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            credentials: CredentialsConfig::default(),
            device: DeviceConfig::default(),
            endpoint: EndpointConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    /// Loads `path`, or writes the defaults there when `create` is set and
    /// the file is missing. A file that exists but does not parse is left
    /// alone. Validation is up to the caller, after overrides are applied.
    /// Logging is not set up yet at this point, so progress goes to stderr.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(ConfigurationError::IOError(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("No config file found.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init()
                    .to_toml()
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                }
            }
            Err(error) => {
                eprintln!("Config file {} is corrupt and was left untouched.", path);
                eprintln!("[ERROR] {}", error);
                Err(CustomError::new(&format!("could not load {} file: {}", path, error)))
            }
        }
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`; empty values are ignored.
    pub fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(base_dir) = lookup(ENV_BASE_DIR) {
            self.credentials.base_dir = base_dir;
        }
        if let Some(thing_name) = lookup(ENV_THING_NAME) {
            self.device.thing_name = thing_name;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            self.endpoint.set_address(&endpoint);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("[DEVICE] thing_name", &self.device.thing_name, THING_NAME_REGEX)?;
        if level_filter(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        if self.endpoint.host.trim().is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("[ENDPOINT] host is empty")));
        }
        if self.endpoint.port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[ENDPOINT] port must not be 0")));
        }
        if self.device.report_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[DEVICE] report_interval must not be 0")));
        }
        KeyAlgorithm::parse_hint(&self.credentials.key_algorithm)
            .map_err(|e| ConfigurationError::ValidationError(format!("[CREDENTIALS] {}", e)))?;
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{} [:] {}", name, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{} [:] Name: \"{}\" [:] Regex: \"{}\"",
                name, value, regex_check
            )));
        }
        Ok(())
    }
}
