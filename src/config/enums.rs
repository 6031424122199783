/// Errors raised while reading, writing or validating the configuration.
pub mod configuration_error;
