// Tree navigation methods for BaseExtractor
//
// Kept apart from extractor.rs: these never look at file content, only shape.

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor<'_> {
    /// Walk tree with visitor, pre-order
    #[allow(clippy::only_used_in_recursion)] // &self used in recursive calls
    pub fn walk_tree<'t, F>(&self, node: &Node<'t>, visitor: &mut F)
    where
        F: FnMut(&Node<'t>),
    {
        visitor(node);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk_tree(&child, visitor);
        }
    }

    /// Find nodes of any of the given kinds, in document order
    pub fn find_nodes_by_types<'t>(&self, node: &Node<'t>, node_types: &[&str]) -> Vec<Node<'t>> {
        let mut nodes = Vec::new();
        self.walk_tree(node, &mut |candidate| {
            if node_types.contains(&candidate.kind()) {
                nodes.push(*candidate);
            }
        });
        nodes
    }

    /// Named children, skipping comments
    pub fn named_children<'t>(&self, node: &Node<'t>) -> Vec<Node<'t>> {
        let mut cursor = node.walk();
        let children = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != "comment")
            .collect();
        children
    }

    /// First named, non-comment child
    pub fn first_named_child<'t>(&self, node: &Node<'t>) -> Option<Node<'t>> {
        self.named_children(node).into_iter().next()
    }

    /// Find first child by type
    pub fn find_child_by_type<'t>(&self, node: &Node<'t>, child_type: &str) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        let found = node
            .children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Check if node is, or contains, a syntax error
    pub fn has_error(&self, node: &Node) -> bool {
        node.is_error() || node.has_error()
    }
}
