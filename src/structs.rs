use crate::credentials::enums::key_algorithm::KeyAlgorithm;
use clap::{
    Parser,
    Subcommand
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check that the certificate and private key files exist.
    Check,
    /// Load the credentials into a keystore and print a summary.
    Load {
        /// Algorithm of bare DER keys, overriding the configuration.
        #[arg(long, value_enum)]
        key_algorithm: Option<KeyAlgorithm>,
    },
    /// Write credentials from a CreateKeysAndCertificate response.
    Provision {
        /// JSON file holding the response.
        #[arg(long, conflicts_with = "from_env", required_unless_present = "from_env")]
        from_json: Option<PathBuf>,
        /// Read IOT_CERTIFICATE_PEM and IOT_PRIVATE_KEY_PEM instead.
        #[arg(long)]
        from_env: bool,
    },
    /// Generate self-signed development credentials.
    Selfsigned {
        #[arg(long, default_value = "localhost")]
        domain: String,
    },
    /// Print the device shadow report.
    Report,
    /// Perform a mutual-TLS handshake with the configured endpoint.
    Handshake {
        /// Overrides the configured endpoint port.
        #[arg(long)]
        port: Option<u16>,
    },
}
