//! Ignore patterns for component source trees
//!
//! Keeps the scanner out of directories that never hold first-party
//! components: package caches, build output, version control, snapshots.
//! Test, story, and type-declaration files are excluded as file patterns.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Default directories to always ignore
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Package managers
    "node_modules",
    ".pnpm",
    ".yarn",
    ".npm",
    "bower_components",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Build outputs
    "build",
    "dist",
    "out",
    "output",
    ".next",
    ".nuxt",
    ".turbo",
    ".vercel",
    "storybook-static",
    // Coverage/Testing
    "coverage",
    ".nyc_output",
    "__snapshots__",
    "__tests__",
    "__mocks__",
    "__fixtures__",
    // Caches
    ".cache",
    ".parcel-cache",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Temp
    "tmp",
    "temp",
];

/// File patterns to ignore (generated, minified, or not component sources)
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    // Type declarations
    "*.d.ts",
    // Test/spec/story files
    "*.test.*",
    "*.spec.*",
    "*.stories.*",
    // Bundled/minified output
    "*.min.js",
    "*.bundle.js",
    // Source maps and snapshots
    "*.map",
    "*.snap",
];

/// Patterns for the ignore crate
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Create ignore patterns from defaults + custom patterns
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        // Add default directory ignores
        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }

        // Add default file ignores
        for pattern in DEFAULT_IGNORE_FILES {
            let _ = builder.add_line(None, pattern);
        }

        // Add custom patterns
        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        // Try to load .radiusignore if it exists
        let radiusignore = root.join(".radiusignore");
        if radiusignore.exists() {
            let _ = builder.add(&radiusignore);
        }

        // Try to load .gitignore if it exists
        let gitignore = root.join(".gitignore");
        if gitignore.exists() {
            let _ = builder.add(&gitignore);
        }

        Self {
            gitignore: builder.build().unwrap_or_else(|_| {
                GitignoreBuilder::new(root).build().unwrap()
            }),
        }
    }

    /// Check if a path should be ignored
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

/// Lazy static default ignores
pub static DEFAULT_IGNORES: std::sync::LazyLock<Vec<String>> = std::sync::LazyLock::new(|| {
    let mut patterns = Vec::new();
    patterns.extend(DEFAULT_IGNORE_DIRS.iter().map(|s| s.to_string()));
    patterns.extend(DEFAULT_IGNORE_FILES.iter().map(|s| s.to_string()));
    patterns
});
