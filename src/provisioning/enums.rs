/// Errors raised while reading or writing provisioned credentials.
pub mod provisioning_error;
