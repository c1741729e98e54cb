//! File operations module
//!
//! This module contains the per-file copy with placeholder substitution.

mod actions;

pub use actions::{FileActionResult, process_file};
