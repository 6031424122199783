/// Ordered X.509 certificate chain.
pub mod certificate_chain;

/// Keystore and password handed to the TLS client.
pub mod credential_bundle;

/// Thing-specific credential path resolution.
pub mod credential_loader;

/// Decoded private key with its signing handle.
pub mod private_key;
