//! Extract module - Per-file component fact extraction
//!
//! Parses JavaScript/TypeScript sources with tree-sitter and emits the raw
//! facts the usage graph is built from: component definitions and the JSX
//! tags rendered inside them.

mod names;
mod tsx;
mod types;

pub use names::is_component_name;
pub use tsx::FactExtractor;
pub use types::{ExtractError, FileFacts, SourceLanguage, UsageFact};
