//! Filesystem utility helpers.

pub mod fs;

pub use fs::hoist_dir_contents;
