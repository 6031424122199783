use clap::Parser;
use iotcore_keystore::commands::run;
use iotcore_keystore::common::common::setup_logging;
use iotcore_keystore::config::structs::configuration::Configuration;
use iotcore_keystore::structs::Cli;
use log::{
    error,
    info
};
use std::process::exit;

#[tracing::instrument(level = "debug")]
fn main()
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_env_overrides();
    eprintln!("[VALIDATE] Validating configuration...");
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE] {}", error);
        exit(101);
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("{}", error);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(error) = run(&args.command, &config) {
        error!("[ERROR] {}", error);
        exit(1);
    }
}
