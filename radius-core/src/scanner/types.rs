//! Scanner types - Core data structures for file scanning

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the scanner
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Glob patterns to include (e.g., "**/*.tsx")
    pub patterns: Vec<String>,
    /// Additional patterns to ignore (beyond defaults)
    pub extra_ignores: Vec<String>,
    /// Whether to compute file hashes
    pub compute_hashes: bool,
    /// Maximum file size to process (bytes)
    pub max_file_size: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: vec![
                "**/*.ts".to_string(),
                "**/*.tsx".to_string(),
                "**/*.js".to_string(),
                "**/*.jsx".to_string(),
            ],
            extra_ignores: vec![],
            compute_hashes: false,
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

/// Information about a scanned file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Relative path from scan root
    pub path: String,
    /// File size in bytes
    pub size: u64,
    /// xxHash of file contents (if computed)
    pub hash: Option<String>,
}

/// Statistics about the scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total eligible files found
    pub total_files: usize,
    /// Total bytes across eligible files
    pub total_bytes: u64,
    /// Directories skipped (ignored)
    pub dirs_skipped: usize,
    /// Files skipped (ignored, too large, not a component source)
    pub files_skipped: usize,
    /// Scan duration in milliseconds
    pub duration_ms: u64,
}

/// Result of a scan operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Root directory that was scanned
    pub root: String,
    /// All eligible files, in lexicographic path order
    pub files: Vec<FileInfo>,
    /// Scan statistics
    pub stats: ScanStats,
    /// Any errors encountered (non-fatal)
    pub errors: Vec<String>,
}
