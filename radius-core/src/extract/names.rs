//! Component name heuristics

use regex::Regex;
use std::sync::LazyLock;

/// PascalCase identifier: uppercase ASCII first character, alphanumeric rest
static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("valid regex"));

/// Whether an identifier names a component.
///
/// Components are PascalCase by convention; lowercase tags are host elements
/// (`div`, `span`) and anything with punctuation is a member or namespaced
/// tag, which the analysis does not resolve.
pub fn is_component_name(name: &str) -> bool {
    PASCAL_CASE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pascal_case() {
        assert!(is_component_name("Button"));
        assert!(is_component_name("LoginForm"));
        assert!(is_component_name("Grid2"));
        assert!(is_component_name("A"));
    }

    #[test]
    fn test_rejects_host_elements_and_non_identifiers() {
        assert!(!is_component_name("div"));
        assert!(!is_component_name("button"));
        assert!(!is_component_name(""));
        assert!(!is_component_name("2Fast"));
        assert!(!is_component_name("My_Component"));
        assert!(!is_component_name("Foo.Bar"));
        assert!(!is_component_name("svg:circle"));
    }
}
