//! Configuration module
//!
//! This module contains components for resolving the build settings.

pub mod deserializer;
mod loader;
mod model;

pub use loader::{
    EnvProvider, MapEnvProvider, StdEnvProvider, load_file_config, resolve_settings,
};
pub use model::{BuildSettings, FileConfig, PathOverrides};
