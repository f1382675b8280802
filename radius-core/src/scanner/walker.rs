//! Deterministic file walker
//!
//! Walks the project tree in lexicographic path order so that every scan of
//! the same tree yields the same file list. Downstream behavior that depends
//! on scan order (last-definition-wins, child ordering in resolved trees)
//! is reproducible because of this ordering.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;
use walkdir::WalkDir;
use xxhash_rust::xxh3::xxh3_64;

use super::ignores::IgnorePatterns;
use super::types::{FileInfo, ScanConfig, ScanResult, ScanStats};

/// File scanner producing the eligible component-source file list
pub struct Scanner {
    config: ScanConfig,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
}

impl Scanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        let ignores = IgnorePatterns::new(&config.root, &config.extra_ignores);

        // Build glob set for include patterns
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.patterns {
            if let Ok(glob) = Glob::new(pattern) {
                builder.add(glob);
            }
        }
        let include_globs = builder
            .build()
            .unwrap_or_else(|_| GlobSetBuilder::new().build().unwrap());

        Self {
            config,
            ignores,
            include_globs,
        }
    }

    /// Scan the filesystem and return results
    pub fn scan(&self) -> ScanResult {
        let start = Instant::now();

        let dirs_skipped = AtomicUsize::new(0);
        let files_skipped = AtomicUsize::new(0);
        let mut errors: Vec<String> = Vec::new();
        let mut files: Vec<FileInfo> = Vec::new();

        let walker = WalkDir::new(&self.config.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let path = entry.path();
                let relative = path.strip_prefix(&self.config.root).unwrap_or(path);
                // The root itself has an empty relative path
                if relative.as_os_str().is_empty() {
                    return true;
                }
                let is_dir = entry.file_type().is_dir();
                if self.ignores.is_ignored(relative, is_dir) {
                    if is_dir {
                        dirs_skipped.fetch_add(1, Ordering::Relaxed);
                    } else {
                        files_skipped.fetch_add(1, Ordering::Relaxed);
                    }
                    return false;
                }
                true
            });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    errors.push(e.to_string());
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match self.process_file(entry.path()) {
                Ok(Some(info)) => files.push(info),
                Ok(None) => {
                    files_skipped.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    errors.push(format!("{}: {}", entry.path().display(), e));
                }
            }
        }

        let total_bytes = files.iter().map(|f| f.size).sum();
        let stats = ScanStats {
            total_files: files.len(),
            total_bytes,
            dirs_skipped: dirs_skipped.load(Ordering::Relaxed),
            files_skipped: files_skipped.load(Ordering::Relaxed),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        debug!(
            files = stats.total_files,
            skipped = stats.files_skipped,
            "scan complete"
        );

        ScanResult {
            root: self.config.root.display().to_string(),
            files,
            stats,
            errors,
        }
    }

    /// Process a single file, returning None for ineligible files
    fn process_file(&self, path: &Path) -> Result<Option<FileInfo>, std::io::Error> {
        let metadata = fs::metadata(path)?;
        let size = metadata.len();

        // Skip files that are too large
        if size > self.config.max_file_size {
            return Ok(None);
        }

        let relative = path.strip_prefix(&self.config.root).unwrap_or(path);

        // Check if file matches include patterns
        if !self.include_globs.is_empty() && !self.include_globs.is_match(relative) {
            return Ok(None);
        }

        let hash = if self.config.compute_hashes {
            Some(compute_file_hash(path)?)
        } else {
            None
        };

        Ok(Some(FileInfo {
            path: relative.to_string_lossy().to_string(),
            size,
            hash,
        }))
    }
}

/// Compute xxHash of a file
fn compute_file_hash(path: &Path) -> Result<String, std::io::Error> {
    let mut file = fs::File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    let hash = xxh3_64(&buffer);
    Ok(format!("{:016x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn scan(root: &Path) -> ScanResult {
        Scanner::new(ScanConfig {
            root: root.to_path_buf(),
            ..Default::default()
        })
        .scan()
    }

    #[test]
    fn test_scan_filters_ineligible_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/Button.tsx", "export function Button() {}");
        write(dir.path(), "src/Button.test.tsx", "test()");
        write(dir.path(), "src/types.d.ts", "declare module 'x';");
        write(dir.path(), "src/styles.css", ".a {}");
        write(dir.path(), "node_modules/lib/index.ts", "export {}");
        write(dir.path(), "dist/Button.js", "var b");

        let result = scan(dir.path());
        let paths: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(paths, vec!["src/Button.tsx"]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_scan_order_is_lexicographic() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/Zebra.tsx", "");
        write(dir.path(), "src/Alpha.tsx", "");
        write(dir.path(), "app/Main.tsx", "");

        let result = scan(dir.path());
        let paths: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();

        assert_eq!(paths, vec!["app/Main.tsx", "src/Alpha.tsx", "src/Zebra.tsx"]);
    }

    #[test]
    fn test_scan_computes_hashes_when_asked() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "A.tsx", "const A = () => null;");

        let result = Scanner::new(ScanConfig {
            root: dir.path().to_path_buf(),
            compute_hashes: true,
            ..Default::default()
        })
        .scan();

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].hash.is_some());
    }

    #[test]
    fn test_scan_skips_oversized_files() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Big.tsx", &"x".repeat(64));
        write(dir.path(), "Small.tsx", "x");

        let result = Scanner::new(ScanConfig {
            root: dir.path().to_path_buf(),
            max_file_size: 8,
            ..Default::default()
        })
        .scan();

        let paths: Vec<&str> = result.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["Small.tsx"]);
    }
}
