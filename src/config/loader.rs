//! Configuration loading functionality
//!
//! This module resolves the build settings from the environment, the
//! optional configuration file and command-line overrides.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde_yaml::from_str;

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_DESTINATION_DIR, DEFAULT_SOURCE_DIR, KEY_ENV_VAR, URL_ENV_VAR,
};
use crate::errors::config_parsing_error;

use super::model::{BuildSettings, FileConfig, PathOverrides};

/// Read access to environment variables
pub trait EnvProvider {
    /// The value of `key`, or `None` when it is unset or not valid Unicode
    fn var(&self, key: &str) -> Option<String>;

    /// The value of `key`, or the empty string
    fn var_or_empty(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// [`EnvProvider`] reading the process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct StdEnvProvider;

impl EnvProvider for StdEnvProvider {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// [`EnvProvider`] backed by a fixed map
#[derive(Debug, Default, Clone)]
pub struct MapEnvProvider {
    vars: HashMap<String, String>,
}

impl MapEnvProvider {
    /// Creates a provider from `(name, value)` pairs
    pub fn new<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MapEnvProvider {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvProvider for MapEnvProvider {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Loads directory overrides from a YAML file
///
/// # Errors
/// Returns an error if the file cannot be read, is not UTF-8 or is not a
/// valid configuration
pub fn load_file_config(file: &Path) -> Result<FileConfig> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    // An empty file is a valid "no overrides" file
    if content_str.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    let config: FileConfig = from_str(&content_str).map_err(|e| {
        let detail = format!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        );
        config_parsing_error(e, &detail)
    })?;

    Ok(config)
}

/// Resolves the settings for one build
///
/// Precedence for each directory is command line, then configuration file,
/// then the `public`/`dist` defaults. Relative paths are resolved against the
/// project root, which defaults to the current directory. The injected values
/// always come from `env`.
///
/// # Arguments
/// * `overrides` - Paths given on the command line
/// * `env` - Source of the URL and key variables
///
/// # Returns
/// * `Result<BuildSettings>` - Absolute directories and the injected values
///
/// # Errors
/// * Returns an error if an explicitly requested configuration file is missing
/// * Returns an error if any configuration file is invalid
pub fn resolve_settings(overrides: &PathOverrides, env: &dyn EnvProvider) -> Result<BuildSettings> {
    let root = match &overrides.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()
            .map_err(|e| anyhow!("Failed to determine the current directory: {e}"))?,
    };

    let file_config = match &overrides.config {
        Some(explicit) => {
            let path = resolve_against(&root, explicit);
            if !path.is_file() {
                return Err(anyhow!(
                    "Configuration file {} does not exist",
                    path.display()
                ));
            }
            load_file_config(&path)?
        }
        None => {
            let path = root.join(DEFAULT_CONFIG_FILE);
            if path.is_file() {
                load_file_config(&path)?
            } else {
                debug!("No configuration file at {}, using defaults", path.display());
                FileConfig::default()
            }
        }
    };

    let source = overrides
        .source
        .clone()
        .or(file_config.source)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    let destination = overrides
        .destination
        .clone()
        .or(file_config.destination)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION_DIR));

    let settings = BuildSettings {
        source: resolve_against(&root, &source),
        destination: resolve_against(&root, &destination),
        url: env.var_or_empty(URL_ENV_VAR),
        key: env.var_or_empty(KEY_ENV_VAR),
    };

    debug!(
        "Resolved build settings: {} -> {}",
        settings.source.display(),
        settings.destination.display()
    );

    Ok(settings)
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
