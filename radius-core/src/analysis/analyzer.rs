//! Usage analyzer - the full scan-to-report pipeline

use std::fs;
use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::extract::{FactExtractor, FileFacts};
use crate::graph::UsageGraph;
use crate::hierarchy::{resolve, summarize};
use crate::scanner::{ScanConfig, Scanner};

use super::types::{AnalysisError, AnalyzeOptions, GraphBuildReport, UsageAnalysis};

/// Orchestrates one analysis run: scan, extract, fold, resolve, summarize.
///
/// Extraction runs in parallel; every file's facts are independent. The fold
/// into the shared graph happens serially afterwards, in the scanner's
/// lexicographic order, so the graph sees no concurrent writes and its
/// insertion order is reproducible. Resolution only ever observes the
/// finished graph.
pub struct UsageAnalyzer {
    options: AnalyzeOptions,
}

impl UsageAnalyzer {
    pub fn new() -> Self {
        Self {
            options: AnalyzeOptions::default(),
        }
    }

    pub fn with_options(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    /// Resolve the usage hierarchy of `component` under `root`.
    pub fn analyze(&self, root: &Path, component: &str) -> Result<UsageAnalysis, AnalysisError> {
        let start = Instant::now();

        let (graph, report) = self.build_graph(root)?;
        let tree = resolve(component, &graph);
        let stats = summarize(&tree);

        Ok(UsageAnalysis {
            component: component.to_string(),
            tree,
            stats,
            files_scanned: report.files_scanned,
            files_parsed: report.files_parsed,
            components_defined: graph.definition_count(),
            usage_edges: graph.edge_count(),
            errors: report.errors,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Scan `root` and build the usage graph.
    ///
    /// The graph is complete and immutable when this returns; callers may
    /// resolve any number of components against it.
    pub fn build_graph(
        &self,
        root: &Path,
    ) -> Result<(UsageGraph, GraphBuildReport), AnalysisError> {
        let start = Instant::now();

        // Only a failure on the root itself is fatal
        fs::read_dir(root).map_err(|source| AnalysisError::Root {
            path: root.display().to_string(),
            source,
        })?;

        // Fail fast if the grammars cannot be loaded at all
        FactExtractor::new().map_err(AnalysisError::Extractor)?;

        let scan = Scanner::new(ScanConfig {
            root: root.to_path_buf(),
            patterns: self.options.patterns.clone(),
            extra_ignores: self.options.extra_ignores.clone(),
            compute_hashes: self.options.compute_hashes,
            max_file_size: self.options.max_file_size,
        })
        .scan();
        debug!(files = scan.files.len(), "scan phase complete");

        // Parallel extraction; collect preserves the scanner's file order
        let outcomes: Vec<(String, Result<FileFacts, String>)> = scan
            .files
            .par_iter()
            .map_init(FactExtractor::new, |extractor, file| {
                let outcome = match extractor {
                    Ok(extractor) => extract_file(extractor, root, &file.path),
                    Err(e) => Err(format!("{}: extractor init failed: {}", file.path, e)),
                };
                (file.path.clone(), outcome)
            })
            .collect();

        // Serial fold in scan order keeps last-definition-wins and edge
        // insertion order deterministic
        let mut graph = UsageGraph::new();
        let mut errors = scan.errors.clone();
        let mut files_parsed = 0;
        for (path, outcome) in outcomes {
            match outcome {
                Ok(facts) => {
                    files_parsed += 1;
                    debug!(
                        file = %path,
                        definitions = facts.definitions.len(),
                        usages = facts.usages.len(),
                        "facts extracted"
                    );
                    for name in &facts.definitions {
                        graph.record_definition(name, &path);
                    }
                    for usage in &facts.usages {
                        graph.record_usage(
                            &usage.component,
                            usage.used_by.as_deref(),
                            &path,
                            usage.line,
                        );
                    }
                }
                Err(e) => {
                    warn!(file = %path, error = %e, "skipping file");
                    errors.push(e);
                }
            }
        }

        let report = GraphBuildReport {
            files_scanned: scan.files.len(),
            files_parsed,
            errors,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        Ok((graph, report))
    }
}

impl Default for UsageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_file(
    extractor: &mut FactExtractor,
    root: &Path,
    relative: &str,
) -> Result<FileFacts, String> {
    let source = fs::read_to_string(root.join(relative))
        .map_err(|e| format!("{}: read failed: {}", relative, e))?;
    extractor.extract(relative, &source).map_err(|e| e.to_string())
}
