//! Analysis types and the fatal error taxonomy
//!
//! Per-file read and parse failures are contained: they are reported on the
//! result and never end a run. Only the conditions in [`AnalysisError`] are
//! fatal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hierarchy::{HierarchyNode, UsageStats};

/// Unrecoverable analysis failures
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The root directory itself could not be read or enumerated
    #[error("failed to read root directory {path}: {source}")]
    Root {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A tree-sitter grammar failed to load
    #[error("failed to initialize fact extractor: {0}")]
    Extractor(String),
}

/// Options for an analysis run
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Glob patterns for files to include
    pub patterns: Vec<String>,
    /// Additional ignore patterns (beyond defaults)
    pub extra_ignores: Vec<String>,
    /// Maximum file size to process (bytes)
    pub max_file_size: u64,
    /// Whether the scan phase computes content hashes
    pub compute_hashes: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        let scan = crate::scanner::ScanConfig::default();
        Self {
            patterns: scan.patterns,
            extra_ignores: scan.extra_ignores,
            max_file_size: scan.max_file_size,
            compute_hashes: scan.compute_hashes,
        }
    }
}

/// Outcome of the scan + extraction + fold phases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphBuildReport {
    /// Eligible files found by the scanner
    pub files_scanned: usize,
    /// Files whose facts were extracted successfully
    pub files_parsed: usize,
    /// Per-file failures (reads, syntax errors), none of them fatal
    pub errors: Vec<String>,
    /// Duration of graph construction in milliseconds
    pub duration_ms: u64,
}

/// The complete result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageAnalysis {
    /// The component the hierarchy was resolved for
    pub component: String,
    /// The resolved used-by tree
    pub tree: HierarchyNode,
    /// Summary metrics over the tree
    pub stats: UsageStats,
    /// Eligible files found by the scanner
    pub files_scanned: usize,
    /// Files whose facts were extracted successfully
    pub files_parsed: usize,
    /// Components with a recorded definition, project-wide
    pub components_defined: usize,
    /// Usage edges recorded, project-wide
    pub usage_edges: usize,
    /// Per-file failures (reads, syntax errors), none of them fatal
    pub errors: Vec<String>,
    /// Total run duration in milliseconds
    pub duration_ms: u64,
}

impl UsageAnalysis {
    /// JSON projection for non-Rust consumers of the report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
