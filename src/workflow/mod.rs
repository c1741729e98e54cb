//! Workflow module
//!
//! This module contains the tree copier and the build orchestration around it.

mod context;
mod engine;

pub use context::{BuildContext, BuildStats, PlannedWrite};
pub use engine::{BuildOptions, copy_tree, run_build, run_build_with};
