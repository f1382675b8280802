//! Component fact extractor using native tree-sitter
//!
//! Recognizes component definitions (top-level PascalCase function
//! declarations with at most one parameter, and PascalCase consts holding an
//! anonymous function) and component usages (PascalCase JSX tags).
//!
//! Usage attribution keeps a single "current component" cursor rather than a
//! scope stack: facts are ordered by byte offset and a usage belongs to the
//! most recently opened definition before it in file order. A reference after
//! a component's body closes still attributes to that component until the
//! next definition opens.

use tree_sitter::{Language, Node, Parser};

use super::names::is_component_name;
use super::types::{ExtractError, FileFacts, SourceLanguage, UsageFact};

/// A fact positioned by its byte offset, before cursor attribution
enum RawFact {
    Definition(String),
    Usage { component: String, line: u32 },
}

/// Extracts component facts from JS/TS/JSX/TSX sources
pub struct FactExtractor {
    tsx: Parser,
    typescript: Parser,
    javascript: Parser,
}

impl FactExtractor {
    /// Create a new extractor with all three grammars loaded
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            tsx: make_parser(tree_sitter_typescript::LANGUAGE_TSX.into())?,
            typescript: make_parser(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())?,
            javascript: make_parser(tree_sitter_javascript::LANGUAGE.into())?,
        })
    }

    /// Extract all component facts from one file.
    ///
    /// A file whose syntax tree contains errors contributes no facts at all;
    /// the caller records the error and continues with the remaining files.
    pub fn extract(&mut self, path: &str, source: &str) -> Result<FileFacts, ExtractError> {
        let language = SourceLanguage::from_path(path)
            .ok_or_else(|| ExtractError::Unsupported(path.to_string()))?;
        let parser = match language {
            SourceLanguage::Tsx => &mut self.tsx,
            SourceLanguage::TypeScript => &mut self.typescript,
            SourceLanguage::JavaScript => &mut self.javascript,
        };

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::Parse(path.to_string()))?;
        if tree.root_node().has_error() {
            return Err(ExtractError::Parse(path.to_string()));
        }

        Ok(collect_facts(tree.root_node(), source.as_bytes()))
    }
}

fn make_parser(language: Language) -> Result<Parser, String> {
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| format!("failed to set language: {}", e))?;
    Ok(parser)
}

/// Walk the tree, gather raw facts, then attribute usages with the cursor
fn collect_facts(root: Node, source: &[u8]) -> FileFacts {
    let mut raw: Vec<(usize, RawFact)> = Vec::new();

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.kind() {
            "function_declaration" => {
                if let Some(name) = declared_function_component(&node, source) {
                    raw.push((node.start_byte(), RawFact::Definition(name)));
                }
            }
            "variable_declarator" => {
                if let Some(name) = declared_const_component(&node, source) {
                    raw.push((node.start_byte(), RawFact::Definition(name)));
                }
            }
            "jsx_opening_element" | "jsx_self_closing_element" => {
                if let Some(component) = referenced_component(&node, source) {
                    let line = node.start_position().row as u32 + 1;
                    raw.push((node.start_byte(), RawFact::Usage { component, line }));
                }
            }
            _ => {}
        }

        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }

    // The stack walk is unordered; offsets restore file order for the cursor
    raw.sort_by_key(|(offset, _)| *offset);

    let mut facts = FileFacts::default();
    let mut current: Option<String> = None;
    for (_, fact) in raw {
        match fact {
            RawFact::Definition(name) => {
                facts.definitions.push(name.clone());
                current = Some(name);
            }
            RawFact::Usage { component, line } => {
                facts.usages.push(UsageFact {
                    component,
                    used_by: current.clone(),
                    line,
                });
            }
        }
    }
    facts
}

/// `function Button(props) {}` at the top level, PascalCase, at most one param
fn declared_function_component(node: &Node, source: &[u8]) -> Option<String> {
    if !is_top_level(node) {
        return None;
    }
    let name = node.child_by_field_name("name")?.utf8_text(source).ok()?;
    if !is_component_name(name) {
        return None;
    }
    let param_count = node
        .child_by_field_name("parameters")
        .map(|p| p.named_child_count())
        .unwrap_or(0);
    if param_count > 1 {
        return None;
    }
    Some(name.to_string())
}

/// `const Button = (props) => ...` or `const Button = function () {}`
fn declared_const_component(node: &Node, source: &[u8]) -> Option<String> {
    let name_node = node.child_by_field_name("name")?;
    if name_node.kind() != "identifier" {
        return None;
    }
    let name = name_node.utf8_text(source).ok()?;
    if !is_component_name(name) {
        return None;
    }
    let value = node.child_by_field_name("value")?;
    match value.kind() {
        "arrow_function" | "function_expression" => Some(name.to_string()),
        _ => None,
    }
}

/// `<Button ...>` or `<Button/>` with a plain PascalCase tag name.
/// Member (`<Foo.Bar>`) and namespaced (`<svg:circle>`) tags fail the
/// PascalCase test by construction and are not tracked.
fn referenced_component(node: &Node, source: &[u8]) -> Option<String> {
    let tag = node.child_by_field_name("name")?.utf8_text(source).ok()?;
    if is_component_name(tag) {
        Some(tag.to_string())
    } else {
        None
    }
}

/// Program-level, directly or under an `export` statement
fn is_top_level(node: &Node) -> bool {
    match node.parent() {
        Some(parent) if parent.kind() == "program" => true,
        Some(parent) if parent.kind() == "export_statement" => parent
            .parent()
            .map_or(false, |grandparent| grandparent.kind() == "program"),
        _ => false,
    }
}
