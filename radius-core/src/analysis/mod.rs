//! Analysis module - Scan-to-report orchestration
//!
//! Ties the pipeline together in one pass: scan the tree, extract facts from
//! every eligible file in parallel, fold them into the usage graph in scan
//! order, then resolve and summarize the requested component.

mod analyzer;
mod types;

pub use analyzer::UsageAnalyzer;
pub use types::{AnalysisError, AnalyzeOptions, GraphBuildReport, UsageAnalysis};
