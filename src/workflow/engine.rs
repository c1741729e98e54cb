//! Workflow engine
//!
//! This module contains the recursive tree copier and the build that wraps
//! it with the console summary.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::BuildSettings;
use crate::errors::{
    self, generic_error, not_a_directory_error, overlap_error, source_not_found_error,
};
use crate::file_ops::process_file;
use crate::fs::{FileSystem, RealFileSystem};
use crate::masking::{mask_key, mask_url};
use crate::substitution::Replacements;
use crate::utils::is_overlap;

use super::context::BuildContext;

/// Options for running a build
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Whether to only report what would be written
    pub dry_run: bool,
}

/// Mirrors `source` into `destination`, replacing placeholders in every file
///
/// Directories are created as needed, including empty ones. Existing
/// destination files are overwritten and files that have no counterpart in
/// the source are left alone. The first failure aborts the copy.
///
/// # Arguments
/// * `fs` - The filesystem holding both trees
/// * `source` - The directory to mirror
/// * `destination` - Where the mirrored tree is written
/// * `replacements` - The placeholder table applied to every file
/// * `context` - Collects statistics and, in a dry run, the planned writes
///
/// # Returns
/// * `Result<()>` - Success, with the outcome recorded in `context`
///
/// # Errors
/// * Returns an error if `source` is missing or not a directory
/// * Returns an error if `destination` lies inside `source`
/// * Returns an error if any file cannot be read or written
pub fn copy_tree(
    fs: &dyn FileSystem,
    source: &Path,
    destination: &Path,
    replacements: &Replacements,
    context: &mut BuildContext,
) -> errors::Result<()> {
    if !fs.exists(source) {
        return Err(source_not_found_error(source.to_path_buf()));
    }
    if !fs.is_dir(source) {
        return Err(not_a_directory_error(source.to_path_buf()));
    }
    if is_overlap(source, destination) {
        return Err(overlap_error(
            source.to_path_buf(),
            destination.to_path_buf(),
        ));
    }

    copy_directory(fs, source, destination, replacements, context)
}

fn copy_directory(
    fs: &dyn FileSystem,
    source: &Path,
    destination: &Path,
    replacements: &Replacements,
    context: &mut BuildContext,
) -> errors::Result<()> {
    if !context.dry_run && !fs.is_dir(destination) {
        fs.create_dir_all(destination)?;
        context.increment_directories_created();
        debug!("Created directory {}", destination.display());
    }

    for child in fs.list_dir(source)? {
        let name = child.file_name().ok_or_else(|| {
            generic_error(&format!("Directory entry without a name: {}", child.display()))
        })?;
        let target = destination.join(name);

        if fs.is_dir(&child) {
            copy_directory(fs, &child, &target, replacements, context)?;
        } else {
            process_file(fs, &child, &target, replacements, context)?;
        }
    }

    Ok(())
}

/// Runs a build against the real filesystem
///
/// See [`run_build_with`].
pub fn run_build(settings: &BuildSettings, options: &BuildOptions) -> Result<BuildContext> {
    run_build_with(&RealFileSystem, settings, options)
}

/// Runs a build: prints the masked configuration, copies the tree, prints
/// the completion line
///
/// # Errors
/// Returns the first error of the copy, with the source and destination as
/// context
pub fn run_build_with(
    fs: &dyn FileSystem,
    settings: &BuildSettings,
    options: &BuildOptions,
) -> Result<BuildContext> {
    info!("");
    info!(
        "🔨 Building static assets{}...",
        if options.dry_run { " (dry run)" } else { "" }
    );
    info!("   SUPABASE_URL: {}", mask_url(&settings.url));
    info!("   SUPABASE_KEY: {}", mask_key(&settings.key));
    info!("");

    let replacements = Replacements::from_settings(settings)?;
    let mut context = BuildContext::new(options.dry_run);

    copy_tree(
        fs,
        &settings.source,
        &settings.destination,
        &replacements,
        &mut context,
    )
    .with_context(|| {
        format!(
            "Build from {} to {} failed",
            settings.source.display(),
            settings.destination.display()
        )
    })?;

    let stats = &context.stats;
    debug!(
        "{} files, {} substituted, {} replacements, {} bytes written, {} directories created",
        stats.files_processed,
        stats.files_substituted,
        stats.replacements_made,
        stats.bytes_written,
        stats.directories_created
    );

    info!("");
    if options.dry_run {
        info!(
            "Dry run complete: {} files would be written to {}",
            context.planned_writes.len(),
            settings.destination.display()
        );
        info!("Run without --dry-run to write them.");
    } else {
        info!("✅ Build complete → {}", settings.destination.display());
    }
    info!("");

    Ok(context)
}
