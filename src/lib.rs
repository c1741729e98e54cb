//! Static asset build step
//!
//! Copies a source directory tree to a destination directory, replacing the
//! `__SUPABASE_URL__` and `__SUPABASE_ANON_KEY__` placeholders in every file
//! with values taken from the environment.
//!
//! ```no_run
//! use std::path::Path;
//! use static_inject::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = BuildSettings::with_root(Path::new("."), "https://x.test", "abc123");
//! let context = run_build(&settings, &BuildOptions::default())?;
//! println!("{} files written", context.stats.files_processed);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod file_ops;
pub mod fs;
pub mod logging;
pub mod masking;
pub mod substitution;
mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{
        BuildSettings, EnvProvider, PathOverrides, StdEnvProvider, resolve_settings,
    };
    pub use crate::errors::{
        config_parsing_error, file_operation_error, generic_error, not_a_directory_error,
        overlap_error, source_not_found_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::fs::{FileSystem, MemoryFileSystem, RealFileSystem};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::substitution::Replacements;
    pub use crate::workflow::{BuildContext, BuildOptions, copy_tree, run_build, run_build_with};
}
