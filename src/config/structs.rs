/// Root configuration.
pub mod configuration;

/// `[credentials]` section.
pub mod credentials_config;

/// `[device]` section.
pub mod device_config;

/// `[endpoint]` section.
pub mod endpoint_config;
