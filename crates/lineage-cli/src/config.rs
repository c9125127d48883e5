//! Configuration loading for the lineage CLI.
//!
//! Configuration comes from a TOML file: either the path passed via
//! `--config`, or `lineage.toml` in the platform configuration directory.
//! An explicit path that does not exist is an error; a missing default file
//! just means defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};

use lineage::config::AppConfig;

use crate::error::CliError;

/// Loads the application configuration.
pub(crate) fn load_config(path: Option<&String>) -> Result<AppConfig, CliError> {
    match path {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_path_buf()));
            }
            read_config(path)
        }
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                debug!("No configuration file found; using defaults");
                Ok(AppConfig::default())
            }
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, CliError> {
    info!(config_path:? = path; "Loading configuration");
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lineage").map(|dirs| dirs.config_dir().join("lineage.toml"))
}
