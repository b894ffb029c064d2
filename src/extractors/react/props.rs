//! Prop-name resolution for one component candidate
//!
//! Rules are tried in order and the first non-empty result wins:
//! 1. destructuring pattern on the first parameter
//! 2. inline object type on the parameter or on a generic argument
//! 3. named type on the parameter or on a generic argument
//! 4. a `<ComponentName>Props` type declared in the same file

use super::components::ComponentCandidate;
use super::helpers::unwrap_type_annotation;
use super::types::TypeResolver;
use crate::extractors::base::{BaseExtractor, ComponentKind};
use tree_sitter::Node;

pub(super) fn resolve_props<'t>(
    base: &BaseExtractor<'t>,
    candidate: &ComponentCandidate<'t>,
    resolver: &TypeResolver<'_, 't>,
) -> Vec<String> {
    let (pattern, parameter_type) = match first_parameter(base, candidate.function) {
        Some(parameter) => split_parameter(base, parameter),
        None => (None, None),
    };

    if let Some(pattern) = pattern.filter(|p| p.kind() == "object_pattern") {
        let names = destructured_names(base, pattern);
        if !names.is_empty() {
            return names;
        }
    }

    let type_sources: Vec<Node<'t>> = [
        parameter_type,
        declared_type_argument(base, candidate),
        wrapper_type_argument(base, candidate),
    ]
    .into_iter()
    .flatten()
    .collect();

    for source in type_sources.iter().filter(|t| t.kind() == "object_type") {
        let names = resolver.members(*source);
        if !names.is_empty() {
            return names;
        }
    }

    for source in type_sources.iter().filter(|t| t.kind() != "object_type") {
        let names = resolver.resolve(*source);
        if !names.is_empty() {
            return names;
        }
    }

    resolver.resolve_named(&format!("{}Props", candidate.name))
}

fn first_parameter<'t>(base: &BaseExtractor, function: Node<'t>) -> Option<Node<'t>> {
    if let Some(parameters) = function.child_by_field_name("parameters") {
        return base.first_named_child(&parameters);
    }
    // `props => ...` has a single bare parameter
    function.child_by_field_name("parameter")
}

/// Binding pattern and declared type of a parameter
fn split_parameter<'t>(base: &BaseExtractor, parameter: Node<'t>) -> (Option<Node<'t>>, Option<Node<'t>>) {
    match parameter.kind() {
        "required_parameter" | "optional_parameter" => (
            parameter.child_by_field_name("pattern"),
            parameter
                .child_by_field_name("type")
                .and_then(|annotation| unwrap_type_annotation(base, annotation)),
        ),
        // JavaScript default: `({ a } = {}) => ...`
        "assignment_pattern" => (parameter.child_by_field_name("left"), None),
        _ => (Some(parameter), None),
    }
}

fn destructured_names(base: &BaseExtractor, pattern: Node) -> Vec<String> {
    let mut names = Vec::new();
    for element in base.named_children(&pattern) {
        let name = match element.kind() {
            "shorthand_property_identifier_pattern" => Some(base.get_node_text(&element)),
            "pair_pattern" => element
                .child_by_field_name("key")
                .filter(|key| key.kind() != "computed_property_name")
                .map(|key| base.get_key_text(&key)),
            "object_assignment_pattern" => element
                .child_by_field_name("left")
                .map(|left| base.get_node_text(&left)),
            // `...rest` collects the remaining props, it is not one
            _ => None,
        };
        if let Some(name) = name {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// `P` in `const Button: React.FC<P> = ...`
fn declared_type_argument<'t>(base: &BaseExtractor, candidate: &ComponentCandidate<'t>) -> Option<Node<'t>> {
    let declared = candidate.declared_type?;
    if declared.kind() != "generic_type" {
        return None;
    }
    let arguments = declared.child_by_field_name("type_arguments")?;
    base.first_named_child(&arguments)
}

/// `P` in `memo<P>(...)` or `forwardRef<Element, P>(...)`
fn wrapper_type_argument<'t>(base: &BaseExtractor, candidate: &ComponentCandidate<'t>) -> Option<Node<'t>> {
    let arguments = base.named_children(&candidate.wrapper_type_arguments?);
    let index = match &candidate.kind {
        ComponentKind::Wrapped(wrapper) if wrapper == "forwardRef" => 1,
        _ => 0,
    };
    arguments.get(index).copied()
}
