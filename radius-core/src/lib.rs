//! radius-core: Component usage analysis engine
//!
//! This crate provides the analysis pipeline behind Radius:
//! - Scanner: Deterministic file walking with component-project ignore patterns
//! - Extract: Tree-sitter fact extraction (component definitions and JSX usages)
//! - Graph: The in-memory usage graph built from per-file facts
//! - Hierarchy: Cycle-safe used-by tree resolution and summary statistics
//! - Analysis: The orchestrator tying scan, extraction, and resolution together

pub mod scanner;
pub mod extract;
pub mod graph;
pub mod hierarchy;
pub mod analysis;

// Re-exports for convenience
pub use scanner::{Scanner, ScanConfig, ScanResult, ScanStats, FileInfo};
pub use extract::{
    FactExtractor, ExtractError, FileFacts, UsageFact, SourceLanguage,
    is_component_name,
};
pub use graph::{UsageGraph, Definition, UsageEdge};
pub use hierarchy::{resolve, summarize, HierarchyNode, RenderSite, UsageStats};
pub use analysis::{
    UsageAnalyzer, AnalyzeOptions, AnalysisError, UsageAnalysis, GraphBuildReport,
};
