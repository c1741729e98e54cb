//! Per-file copy and substitution
//!
//! This module reads one source file, replaces its placeholders and writes
//! the result to the mirrored destination path.

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::{debug, info};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::logging::format_message;
use crate::substitution::Replacements;
use crate::utils::display_name;
use crate::workflow::{BuildContext, PlannedWrite};

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Number of placeholders replaced
    pub replacements: usize,
    /// Whether the target was actually written
    pub written: bool,
}

/// Copies one file, replacing placeholders on the way
///
/// The target is overwritten if it exists. Its parent directory must exist.
/// In a dry run the source is still read, so the replacement count is
/// accurate, but nothing is written.
///
/// # Arguments
/// * `fs` - The filesystem to read from and write to
/// * `source` - The file to read
/// * `target` - The mirrored path to write
/// * `replacements` - The placeholder table
/// * `context` - Collects statistics and, in a dry run, the planned writes
///
/// # Returns
/// * `Result<FileActionResult>` - What was done with the file
///
/// # Errors
/// * Returns an error if the source cannot be read
/// * Returns an error if the target cannot be written
pub fn process_file(
    fs: &dyn FileSystem,
    source: &Path,
    target: &Path,
    replacements: &Replacements,
    context: &mut BuildContext,
) -> Result<FileActionResult> {
    let content = fs.read(source)?;
    let substituted = replacements.apply(&content);
    let name = display_name(source);

    if context.dry_run {
        debug!(
            "Simulating write: {} -> {}",
            source.display(),
            target.display()
        );
        context.add_planned_write(PlannedWrite {
            source: source.to_path_buf(),
            destination: target.to_path_buf(),
            replacements: substituted.replacements,
        });
        info!(
            "  {name} -> {} ({} replacements)",
            target.display(),
            substituted.replacements
        );
    } else {
        fs.write(target, &substituted.content)?;
        context.add_bytes_written(substituted.content.len());
        info!(
            "{}",
            format_message(&format!("✓ {name}"), &format!("{} {name}", "✓".green()))
        );
    }

    debug!(
        "{} placeholders replaced in {}",
        substituted.replacements,
        source.display()
    );
    context.record_file(substituted.replacements);

    Ok(FileActionResult {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        replacements: substituted.replacements,
        written: !context.dry_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{KEY_TOKEN, URL_TOKEN};
    use crate::fs::MemoryFileSystem;

    fn replacements() -> Replacements {
        Replacements::new([(URL_TOKEN, "https://x.test"), (KEY_TOKEN, "abc123")]).unwrap()
    }

    #[test]
    fn test_process_file_writes_substituted_content() {
        let fs = MemoryFileSystem::new()
            .with_file("/public/app.js", r#"const k = "__SUPABASE_ANON_KEY__";"#)
            .with_dir("/dist");
        let mut context = BuildContext::new(false);

        let result = process_file(
            &fs,
            Path::new("/public/app.js"),
            Path::new("/dist/app.js"),
            &replacements(),
            &mut context,
        )
        .unwrap();

        assert!(result.written);
        assert_eq!(result.replacements, 1);
        assert_eq!(
            fs.file_content("/dist/app.js"),
            Some(br#"const k = "abc123";"#.to_vec())
        );
        assert_eq!(context.stats.bytes_written, 19);
    }

    #[test]
    fn test_process_file_overwrites_target() {
        let fs = MemoryFileSystem::new()
            .with_file("/public/a.txt", "new")
            .with_file("/dist/a.txt", "stale content");
        let mut context = BuildContext::new(false);

        process_file(
            &fs,
            Path::new("/public/a.txt"),
            Path::new("/dist/a.txt"),
            &replacements(),
            &mut context,
        )
        .unwrap();

        assert_eq!(fs.file_content("/dist/a.txt"), Some(b"new".to_vec()));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let fs = MemoryFileSystem::new()
            .with_file("/public/index.html", "__SUPABASE_URL__")
            .with_dir("/dist");
        let mut context = BuildContext::new(true);

        let result = process_file(
            &fs,
            Path::new("/public/index.html"),
            Path::new("/dist/index.html"),
            &replacements(),
            &mut context,
        )
        .unwrap();

        assert!(!result.written);
        assert_eq!(fs.file_content("/dist/index.html"), None);
        assert_eq!(
            context.planned_writes,
            vec![PlannedWrite {
                source: PathBuf::from("/public/index.html"),
                destination: PathBuf::from("/dist/index.html"),
                replacements: 1,
            }]
        );
        assert_eq!(context.stats.bytes_written, 0);
    }

    #[test]
    fn test_missing_parent_fails() {
        let fs = MemoryFileSystem::new().with_file("/public/a.txt", "a");
        let mut context = BuildContext::new(false);

        let error = process_file(
            &fs,
            Path::new("/public/a.txt"),
            Path::new("/dist/a.txt"),
            &replacements(),
            &mut context,
        )
        .unwrap_err();

        assert_eq!(error.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert_eq!(context.stats.files_processed, 0);
    }
}
