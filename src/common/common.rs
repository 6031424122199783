use std::fs;
use std::io::Write;
use std::path::Path;
use fern::colors::{Color, ColoredLevelConfig};
use log::{error, info};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn level_filter(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match level_filter(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level.as_str())));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(error) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {}", error)));
    }
    info!("logging initialized.");
    Ok(())
}

fn create_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes `data` to `path`, creating missing parent directories first.
pub fn write_file<P: AsRef<Path>>(path: P, data: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    fs::write(path, data)
}

/// Writes `data` to a new file at `path` that is owner-only (0600) from the
/// moment it is created on unix. An existing file at `path` is removed first.
pub fn write_private_file<P: AsRef<Path>>(path: P, data: &str) -> std::io::Result<()> {
    let path = path.as_ref();
    create_parent(path)?;
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => return Err(error),
    }
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()
}

/// Deletes the file at `path` if it exists.
///
/// Failures are logged and reported as `false`, never propagated.
pub fn delete_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let mut result = false;
    if path.exists() {
        match fs::remove_file(path) {
            Ok(()) => { result = true; }
            Err(error) => {
                error!("[FILE] Failed to delete file '{}': {}", path.display(), error);
            }
        }
    }
    info!("[FILE] Deleting '{}' has done. Is deleted successfully: {}", path.display(), result);
    result
}

pub fn check_file_exists(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    Path::new(path).exists()
}

pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
