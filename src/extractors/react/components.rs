//! Component candidate selection
//!
//! Only top-level statements are considered, optionally behind `export` or
//! `export default`:
//! - `function Button(props) {}`
//! - `const Button = (props) => {}` / `const Button = function () {}`
//! - `const Button = memo((props) => {})` with exactly one recognized wrapper
//!
//! The recorded line is the `function` keyword or the start of the variable
//! statement, never the `export` token.

use super::helpers::{
    is_component_name, is_function_value, unwrap_parenthesized, unwrap_type_annotation,
    wrapper_name,
};
use crate::extractors::base::{BaseExtractor, ComponentKind};
use tracing::debug;
use tree_sitter::Node;

/// A declaration that passed candidate selection, before prop resolution
pub(super) struct ComponentCandidate<'t> {
    pub name: String,
    pub kind: ComponentKind,
    pub line: u32,
    /// The function-like node whose first parameter carries the props
    pub function: Node<'t>,
    /// Type annotated on the variable, e.g. `React.FC<Props>`
    pub declared_type: Option<Node<'t>>,
    /// Type arguments of the wrapping call, e.g. `<HTMLButtonElement, Props>`
    pub wrapper_type_arguments: Option<Node<'t>>,
}

pub(super) fn find_candidates<'t>(
    base: &BaseExtractor<'t>,
    root: Node<'t>,
) -> Vec<ComponentCandidate<'t>> {
    // Any syntax error anywhere disqualifies the whole file
    if base.has_error(&root) {
        debug!("Skipping {}: syntax errors", base.file_path.display());
        return Vec::new();
    }

    let mut candidates = Vec::new();

    for statement in base.named_children(&root) {
        let declaration = unwrap_export(statement);

        match declaration.kind() {
            "function_declaration" => {
                if let Some(candidate) = function_candidate(base, declaration) {
                    candidates.push(candidate);
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                candidates.extend(variable_candidates(base, declaration));
            }
            _ => {}
        }
    }

    candidates
}

fn unwrap_export(statement: Node) -> Node {
    if statement.kind() == "export_statement" {
        statement
            .child_by_field_name("declaration")
            .unwrap_or(statement)
    } else {
        statement
    }
}

fn function_candidate<'t>(base: &BaseExtractor<'t>, node: Node<'t>) -> Option<ComponentCandidate<'t>> {
    let name = base.get_field_text(&node, "name")?;
    if !is_component_name(&name) {
        return None;
    }

    Some(ComponentCandidate {
        name,
        kind: ComponentKind::Function,
        line: base.line_of(&node),
        function: node,
        declared_type: None,
        wrapper_type_arguments: None,
    })
}

fn variable_candidates<'t>(
    base: &BaseExtractor<'t>,
    declaration: Node<'t>,
) -> Vec<ComponentCandidate<'t>> {
    let line = base.line_of(&declaration);
    let mut candidates = Vec::new();

    for declarator in base.named_children(&declaration) {
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        // Destructuring declarations never name a component
        let Some(name_node) = declarator.child_by_field_name("name") else {
            continue;
        };
        if name_node.kind() != "identifier" {
            continue;
        }
        let name = base.get_node_text(&name_node);
        if !is_component_name(&name) {
            continue;
        }
        let Some(value) = declarator.child_by_field_name("value") else {
            continue;
        };
        let value = unwrap_parenthesized(base, value);
        let declared_type = declarator
            .child_by_field_name("type")
            .and_then(|annotation| unwrap_type_annotation(base, annotation));

        if is_function_value(&value) {
            candidates.push(ComponentCandidate {
                name,
                kind: ComponentKind::Variable,
                line,
                function: value,
                declared_type,
                wrapper_type_arguments: None,
            });
        } else if value.kind() == "call_expression" {
            if let Some((wrapper, function)) = wrapped_function(base, value) {
                candidates.push(ComponentCandidate {
                    name,
                    kind: ComponentKind::Wrapped(wrapper),
                    line,
                    function,
                    declared_type,
                    wrapper_type_arguments: value.child_by_field_name("type_arguments"),
                });
            }
        }
    }

    candidates
}

/// `memo(fn)`: the recognized wrapper and its function argument
///
/// `memo(forwardRef(fn))` is rejected: the argument is a call, not a function.
fn wrapped_function<'t>(base: &BaseExtractor<'t>, call: Node<'t>) -> Option<(String, Node<'t>)> {
    let wrapper = wrapper_name(base, &call)?;
    let arguments = call.child_by_field_name("arguments")?;
    let first = unwrap_parenthesized(base, base.first_named_child(&arguments)?);
    is_function_value(&first).then_some((wrapper, first))
}
