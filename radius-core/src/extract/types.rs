//! Extraction types

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Source language of a scanned file, selecting the tree-sitter grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    Tsx,
    TypeScript,
    JavaScript,
}

impl SourceLanguage {
    /// Detect language from file extension
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = Path::new(path).extension()?.to_str()?;
        match ext {
            "tsx" => Some(Self::Tsx),
            "ts" => Some(Self::TypeScript),
            "js" | "jsx" => Some(Self::JavaScript),
            _ => None,
        }
    }
}

/// Error from extracting facts from a single file
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file is not a recognized component source
    #[error("unsupported source file: {0}")]
    Unsupported(String),
    /// The source is not syntactically valid; the file contributes no facts
    #[error("syntax error in {0}")]
    Parse(String),
}

/// A component reference observed in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageFact {
    /// The component being rendered
    pub component: String,
    /// The component whose definition was open at the reference site.
    /// None when the reference appeared before any definition; such
    /// references are dropped when the graph is built.
    pub used_by: Option<String>,
    /// 1-based line of the reference
    pub line: u32,
}

/// All facts extracted from one file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFacts {
    /// Component names defined in the file, in source order
    pub definitions: Vec<String>,
    /// Component references, in source order
    pub usages: Vec<UsageFact>,
}

impl FileFacts {
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.usages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        assert_eq!(SourceLanguage::from_path("src/App.tsx"), Some(SourceLanguage::Tsx));
        assert_eq!(SourceLanguage::from_path("src/util.ts"), Some(SourceLanguage::TypeScript));
        assert_eq!(SourceLanguage::from_path("a.js"), Some(SourceLanguage::JavaScript));
        assert_eq!(SourceLanguage::from_path("a.jsx"), Some(SourceLanguage::JavaScript));
        assert_eq!(SourceLanguage::from_path("a.css"), None);
        assert_eq!(SourceLanguage::from_path("Makefile"), None);
    }
}
