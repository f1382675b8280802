//! Scanner module - Deterministic file walking for component projects
//!
//! This module provides file system scanning using:
//! - `walkdir` with lexicographic ordering, so scan results are reproducible
//! - `ignore` crate for gitignore-style pattern matching
//! - `xxhash` for fast file hashing

mod ignores;
mod types;
mod walker;

pub use ignores::{IgnorePatterns, DEFAULT_IGNORES};
pub use types::{FileInfo, ScanConfig, ScanResult, ScanStats};
pub use walker::Scanner;
