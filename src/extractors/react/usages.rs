//! Tag usage lookup: what was passed for a prop at `<Component ... />`
//!
//! Values are reported the way they were written:
//! - `<C flag />` gives `true`
//! - `<C label="hi" />` gives `"hi"`, quotes included
//! - `<C label={heading} />` gives `heading`, the unparsed expression
//!
//! When no matching attribute exists but the tag spreads an object into its
//! props, the reserved spread sentinel is returned instead of nothing.

use crate::extractors::base::{BaseExtractor, PropUsage, SPREAD_SENTINEL};
use tree_sitter::Node;

const TAG_KINDS: &[&str] = &["jsx_opening_element", "jsx_self_closing_element"];

/// Outcome of looking for one prop on one tag
pub(super) enum AttributeMatch {
    Explicit(PropUsage),
    Spread(PropUsage),
    Missing,
}

/// Opening and self-closing tags named exactly `component`, document order
pub(super) fn matching_tags<'t>(base: &BaseExtractor, root: Node<'t>, component: &str) -> Vec<Node<'t>> {
    base.find_nodes_by_types(&root, TAG_KINDS)
        .into_iter()
        .filter(|tag| {
            base.get_field_text(tag, "name")
                .is_some_and(|name| name == component)
        })
        .collect()
}

pub(super) fn match_attribute(base: &BaseExtractor, tag: Node, prop: &str) -> AttributeMatch {
    let mut spread = None;

    for attribute in base.named_children(&tag) {
        match attribute.kind() {
            "jsx_attribute" => {
                let Some(name_node) = base.first_named_child(&attribute) else {
                    continue;
                };
                if base.get_node_text(&name_node) != prop {
                    continue;
                }
                let value = match name_node.next_named_sibling() {
                    None => "true".to_string(),
                    Some(value) if value.kind() == "jsx_expression" => expression_text(base, value),
                    Some(value) => base.get_node_text(&value),
                };
                return AttributeMatch::Explicit(base.create_usage(&attribute, value));
            }
            "jsx_expression" if spread.is_none() => {
                let is_spread = base
                    .first_named_child(&attribute)
                    .is_some_and(|inner| inner.kind() == "spread_element");
                if is_spread {
                    spread = Some(base.create_usage(&tag, SPREAD_SENTINEL.to_string()));
                }
            }
            _ => {}
        }
    }

    spread.map_or(AttributeMatch::Missing, AttributeMatch::Spread)
}

/// First explicit value across all matching tags, else a spread if any tag had one
pub(super) fn find_prop_usage(base: &BaseExtractor, root: Node, component: &str, prop: &str) -> Option<PropUsage> {
    let mut spread = None;
    for tag in matching_tags(base, root, component) {
        match match_attribute(base, tag, prop) {
            AttributeMatch::Explicit(usage) => return Some(usage),
            AttributeMatch::Spread(usage) => {
                spread.get_or_insert(usage);
            }
            AttributeMatch::Missing => {}
        }
    }
    spread
}

/// Same lookup restricted to the matching tag closest to `line`
///
/// Ties go to the tag earlier in the document.
pub(super) fn find_prop_usage_near(
    base: &BaseExtractor,
    root: Node,
    component: &str,
    prop: &str,
    line: u32,
) -> Option<PropUsage> {
    let nearest = matching_tags(base, root, component)
        .into_iter()
        .min_by_key(|tag| base.line_of(tag).abs_diff(line))?;

    match match_attribute(base, nearest, prop) {
        AttributeMatch::Explicit(usage) | AttributeMatch::Spread(usage) => Some(usage),
        AttributeMatch::Missing => None,
    }
}

/// Text inside `{ ... }`, without the braces
fn expression_text(base: &BaseExtractor, expression: Node) -> String {
    base.first_named_child(&expression)
        .map(|inner| base.get_node_text(&inner))
        .unwrap_or_default()
}
