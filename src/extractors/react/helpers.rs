//! Helper functions for the component extractor
//!
//! Naming conventions and small node-shape checks shared by the other
//! modules.

use crate::extractors::base::BaseExtractor;
use crate::language::get_function_value_kinds;
use tree_sitter::Node;

/// Higher-order calls whose single function argument is still a component
pub(super) const COMPONENT_WRAPPERS: &[&str] = &["memo", "forwardRef", "observer", "connect"];

/// Components are uppercase by convention; lowercase functions are utilities
pub(super) fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Check if a node is an arrow function or function expression
pub(super) fn is_function_value(node: &Node) -> bool {
    get_function_value_kinds().contains(&node.kind())
}

/// Strip any number of wrapping parentheses: `((props) => ...)`
pub(super) fn unwrap_parenthesized<'t>(base: &BaseExtractor, node: Node<'t>) -> Node<'t> {
    let mut current = node;
    while current.kind() == "parenthesized_expression" {
        match base.first_named_child(&current) {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

/// The type inside a `: Type` annotation
pub(super) fn unwrap_type_annotation<'t>(base: &BaseExtractor, node: Node<'t>) -> Option<Node<'t>> {
    if node.kind() == "type_annotation" {
        base.first_named_child(&node)
    } else {
        Some(node)
    }
}

/// Wrapper name for `memo(...)` or `React.memo(...)`, if recognized
///
/// The curried `connect(mapState)(...)` form counts as a single `connect`.
pub(super) fn wrapper_name(base: &BaseExtractor, call: &Node) -> Option<String> {
    let callee = call.child_by_field_name("function")?;
    let name = match callee.kind() {
        "identifier" => base.get_node_text(&callee),
        "member_expression" => base.get_field_text(&callee, "property")?,
        "call_expression" => {
            return wrapper_name(base, &callee).filter(|inner| inner == "connect");
        }
        _ => return None,
    };
    COMPONENT_WRAPPERS
        .contains(&name.as_str())
        .then_some(name)
}

/// Last segment of a possibly namespace-qualified type name
pub(super) fn simple_type_name(text: &str) -> &str {
    text.rsplit('.').next().unwrap_or(text).trim()
}
