//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::{DEFAULT_DESTINATION_DIR, DEFAULT_SOURCE_DIR};

use super::deserializer::deserialize_optional_path;

/// Everything a build needs, resolved once at the process boundary
///
/// The copier receives this explicitly and never reads the environment
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    /// Directory to copy from
    pub source: PathBuf,
    /// Directory the processed copy is written to
    pub destination: PathBuf,
    /// Value injected in place of the URL token, empty when unset
    pub url: String,
    /// Value injected in place of the key token, empty when unset
    pub key: String,
}

impl BuildSettings {
    /// Settings with the default `public` and `dist` directories under `root`
    pub fn with_root(root: &Path, url: impl Into<String>, key: impl Into<String>) -> Self {
        BuildSettings {
            source: root.join(DEFAULT_SOURCE_DIR),
            destination: root.join(DEFAULT_DESTINATION_DIR),
            url: url.into(),
            key: key.into(),
        }
    }
}

/// Optional directory overrides read from a YAML file
///
/// Paths may be a plain string or a list of path segments. Placeholder
/// values are deliberately absent: they only ever come from the environment.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Directory to copy from
    #[serde(default, deserialize_with = "deserialize_optional_path")]
    pub source: Option<PathBuf>,
    /// Directory the processed copy is written to
    #[serde(default, deserialize_with = "deserialize_optional_path")]
    pub destination: Option<PathBuf>,
}

/// Directory overrides given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathOverrides {
    /// Project root relative paths are resolved against
    pub root: Option<PathBuf>,
    /// Replaces the configured source directory
    pub source: Option<PathBuf>,
    /// Replaces the configured destination directory
    pub destination: Option<PathBuf>,
    /// Explicit configuration file; a missing explicit file is an error
    pub config: Option<PathBuf>,
}
