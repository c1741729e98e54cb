//! Workflow context
//!
//! This module defines the state carried through one build.

use std::path::PathBuf;

/// A write that a dry run would have performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedWrite {
    /// The file read from the source tree
    pub source: PathBuf,
    /// The file that would be written in the destination tree
    pub destination: PathBuf,
    /// Number of placeholders that would be replaced
    pub replacements: usize,
}

/// Statistics about one build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of files read from the source tree
    pub files_processed: usize,
    /// Number of destination directories that had to be created
    pub directories_created: usize,
    /// Number of files with at least one replaced placeholder
    pub files_substituted: usize,
    /// Total number of replaced placeholders
    pub replacements_made: usize,
    /// Total number of bytes written to the destination tree
    pub bytes_written: u64,
}

/// Context for the workflow
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    /// Whether writes are only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: BuildStats,
    /// Writes a dry run would have performed, in traversal order
    pub planned_writes: Vec<PlannedWrite>,
}

impl BuildContext {
    /// Creates a new build context
    pub fn new(dry_run: bool) -> Self {
        BuildContext {
            dry_run,
            ..BuildContext::default()
        }
    }

    /// Records one processed file and its replacement count
    pub fn record_file(&mut self, replacements: usize) {
        self.stats.files_processed += 1;
        if replacements > 0 {
            self.stats.files_substituted += 1;
            self.stats.replacements_made += replacements;
        }
    }

    /// Adds to the number of bytes written
    pub fn add_bytes_written(&mut self, bytes: usize) {
        self.stats.bytes_written += bytes as u64;
    }

    /// Increments the number of directories created
    pub fn increment_directories_created(&mut self) {
        self.stats.directories_created += 1;
    }

    /// Adds a planned write to the context
    pub fn add_planned_write(&mut self, write: PlannedWrite) {
        self.planned_writes.push(write);
    }
}
