use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;
use crate::credentials::structs::credential_loader::CredentialLoader;
use crate::device::enums::shadow_update_type::ShadowUpdateType;
use crate::device::structs::thing_device::ThingDevice;
use crate::device::traits::reportable_device::ReportableDevice;
use crate::provisioning::provisioning::{
    generate_self_signed,
    provision_credentials
};
use crate::provisioning::structs::keys_and_certificate::KeysAndCertificate;
use crate::structs::Command;
use crate::tls::tls::{
    create_client_config,
    handshake,
    load_root_store
};
use log::{
    info,
    warn
};

fn custom_error<E: std::fmt::Display>(error: E) -> CustomError {
    CustomError::new(&error.to_string())
}

#[tracing::instrument(level = "debug", skip(config))]
pub fn run(command: &Command, config: &Configuration) -> Result<(), CustomError> {
    let loader = CredentialLoader::from_config(config).map_err(custom_error)?;
    match command {
        Command::Check => check(&loader),
        Command::Load { key_algorithm } => {
            if key_algorithm.is_some() {
                load(&loader.with_key_algorithm(*key_algorithm))
            } else {
                load(&loader)
            }
        }
        Command::Provision { from_json, from_env } => {
            let keys = match from_json {
                Some(path) if !from_env => KeysAndCertificate::from_json_file(path),
                _ => KeysAndCertificate::from_env(),
            }
            .map_err(custom_error)?;
            provision_credentials(&keys, &loader.cert_path, &loader.key_path).map_err(custom_error)
        }
        Command::Selfsigned { domain } => {
            let keys = generate_self_signed(&config.device.thing_name, domain).map_err(custom_error)?;
            provision_credentials(&keys, &loader.cert_path, &loader.key_path).map_err(custom_error)?;
            info!("[CERTGEN] Use the generated files only for development reasons");
            Ok(())
        }
        Command::Report => report(config),
        Command::Handshake { port } => {
            let port = port.unwrap_or(config.endpoint.port);
            let bundle = loader.load().map_err(custom_error)?;
            let roots = load_root_store(config.credentials.ca_path().as_deref()).map_err(custom_error)?;
            let client_config = create_client_config(&bundle, roots, port).map_err(custom_error)?;
            let summary = handshake(
                client_config,
                &config.endpoint.host,
                port,
                config.endpoint.connect_timeout(),
            )
            .map_err(custom_error)?;
            println!("{}", serde_json::to_string_pretty(&summary).map_err(custom_error)?);
            Ok(())
        }
    }
}

fn check(loader: &CredentialLoader) -> Result<(), CustomError> {
    if loader.credentials_exist() {
        info!("[CREDENTIALS] Credentials found for {}", loader.cert_path.display());
        Ok(())
    } else {
        warn!("[CREDENTIALS] Run 'provision' or 'selfsigned' to create the missing files");
        Err(CustomError::new("credential files are missing"))
    }
}

fn load(loader: &CredentialLoader) -> Result<(), CustomError> {
    let bundle = loader.load().map_err(custom_error)?;
    let chain = bundle.certificate_chain().map_err(custom_error)?;
    let key = bundle.private_key().map_err(custom_error)?;
    info!("[KEYSTORE] Alias: {}", bundle.alias());
    info!("[KEYSTORE] Private key: {} ({})", key.algorithm(), key.encoding());
    for (index, subject) in chain.subjects().iter().enumerate() {
        info!("[KEYSTORE] Certificate #{}: {}", index, subject);
    }
    info!("[KEYSTORE] Key store password generated ({} characters)", bundle.key_password().len());
    Ok(())
}

fn report(config: &Configuration) -> Result<(), CustomError> {
    let device = ThingDevice::from_config(&config.device);
    let document = device.report().map_err(custom_error)?;
    info!("[DEVICE] Report every {} ms", device.report_interval().as_millis());
    info!("[DEVICE] Accepted topic: {}", ShadowUpdateType::Accepted.topic(device.thing_name()));
    info!("[DEVICE] Delta topic: {}", ShadowUpdateType::Delta.topic(device.thing_name()));
    println!("{}", document);
    Ok(())
}
