//! Prop-type resolution
//!
//! Turns a type node into the list of prop names it declares, following
//! named types declared anywhere in the same file. Imports are not followed:
//! a name with no local declaration contributes nothing.
//!
//! Unions contribute every branch's members. The real prop set depends on a
//! runtime discriminant, so this over-approximates on purpose.

use super::helpers::simple_type_name;
use crate::extractors::base::BaseExtractor;
use crate::language::get_type_declaration_kinds;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use tree_sitter::Node;

/// Generic wrappers that add one synthetic prop before their argument's props
const INJECTING_WRAPPERS: &[(&str, &str)] = &[("PropsWithChildren", "children"), ("PropsWithRef", "ref")];

/// Utility types that keep their argument's keys
const KEY_PRESERVING_WRAPPERS: &[&str] = &["Readonly", "Partial", "Required"];

pub(super) struct TypeResolver<'e, 't> {
    base: &'e BaseExtractor<'t>,
    /// First interface / type alias declared under each name, document order
    declarations: HashMap<String, Node<'t>>,
}

impl<'e, 't> TypeResolver<'e, 't> {
    pub fn new(base: &'e BaseExtractor<'t>, root: Node<'t>) -> Self {
        let mut declarations = HashMap::new();
        for declaration in base.find_nodes_by_types(&root, get_type_declaration_kinds()) {
            if let Some(name) = base.get_field_text(&declaration, "name") {
                declarations.entry(name).or_insert(declaration);
            }
        }
        Self { base, declarations }
    }

    /// Member names of an inline object type, in source order
    pub fn members(&self, object_type: Node<'t>) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_members(object_type, &mut out);
        out
    }

    /// Prop names declared by any type node
    pub fn resolve(&self, type_node: Node<'t>) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut out = Vec::new();
        self.collect(type_node, &mut visited, &mut out);
        out
    }

    /// Prop names declared by the named interface or type alias
    pub fn resolve_named(&self, name: &str) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut out = Vec::new();
        self.collect_named(name, &mut visited, &mut out);
        out
    }

    fn collect(&self, node: Node<'t>, visited: &mut HashSet<String>, out: &mut Vec<String>) {
        match node.kind() {
            "object_type" | "interface_body" => self.collect_members(node, out),

            "type_annotation" | "parenthesized_type" | "readonly_type" => {
                if let Some(inner) = self.base.first_named_child(&node) {
                    self.collect(inner, visited, out);
                }
            }

            "intersection_type" | "union_type" => {
                for branch in self.base.named_children(&node) {
                    self.collect(branch, visited, out);
                }
            }

            "type_identifier" | "nested_type_identifier" => {
                let text = self.base.get_node_text(&node);
                self.collect_named(simple_type_name(&text), visited, out);
            }

            "generic_type" => self.collect_generic(node, visited, out),

            "interface_declaration" => {
                if let Some(body) = node.child_by_field_name("body") {
                    self.collect_members(body, out);
                }
                if let Some(extends) = self.base.find_child_by_type(&node, "extends_type_clause") {
                    for parent in self.base.named_children(&extends) {
                        self.collect(parent, visited, out);
                    }
                }
            }

            "type_alias_declaration" => {
                if let Some(value) = node.child_by_field_name("value") {
                    self.collect(value, visited, out);
                }
            }

            // Primitive, literal, function and mapped types declare no props
            _ => {}
        }
    }

    fn collect_generic(&self, node: Node<'t>, visited: &mut HashSet<String>, out: &mut Vec<String>) {
        let Some(name_text) = self.base.get_field_text(&node, "name") else {
            return;
        };
        let name = simple_type_name(&name_text);
        let first_argument = node
            .child_by_field_name("type_arguments")
            .and_then(|arguments| self.base.first_named_child(&arguments));

        if let Some((_, injected)) = INJECTING_WRAPPERS.iter().find(|(wrapper, _)| *wrapper == name) {
            push_unique(out, injected);
            if let Some(argument) = first_argument {
                self.collect(argument, visited, out);
            }
        } else if KEY_PRESERVING_WRAPPERS.contains(&name) {
            if let Some(argument) = first_argument {
                self.collect(argument, visited, out);
            }
        } else {
            // A generic interface or alias declared locally; parameters are ignored
            self.collect_named(name, visited, out);
        }
    }

    fn collect_named(&self, name: &str, visited: &mut HashSet<String>, out: &mut Vec<String>) {
        if !visited.insert(name.to_string()) {
            return;
        }
        match self.declarations.get(name) {
            Some(declaration) => self.collect(*declaration, visited, out),
            None => debug!(
                "Unresolved type '{}' in {}",
                name,
                self.base.file_path.display()
            ),
        }
    }

    fn collect_members(&self, body: Node<'t>, out: &mut Vec<String>) {
        for member in self.base.named_children(&body) {
            if !matches!(member.kind(), "property_signature" | "method_signature") {
                continue;
            }
            let Some(name_node) = member.child_by_field_name("name") else {
                continue;
            };
            if name_node.kind() == "computed_property_name" {
                continue;
            }
            push_unique(out, &self.base.get_key_text(&name_node));
        }
    }
}

fn push_unique(out: &mut Vec<String>, name: &str) {
    if !out.iter().any(|existing| existing == name) {
        out.push(name.to_string());
    }
}
