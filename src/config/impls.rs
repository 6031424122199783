pub mod configuration;
pub mod configuration_error;
pub mod credentials_config;
pub mod device_config;
pub mod endpoint_config;
