// ComponentInfo and PropUsage creation methods
//
// Extracted from extractor.rs so every record is stamped with file path and
// 1-based lines in one place.

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{ComponentInfo, ComponentKind, PropUsage};

impl BaseExtractor<'_> {
    /// Create a component record, dropping duplicate prop names
    pub fn create_component(
        &self,
        name: String,
        kind: ComponentKind,
        line: u32,
        props: Vec<String>,
    ) -> ComponentInfo {
        let mut unique: Vec<String> = Vec::with_capacity(props.len());
        for prop in props {
            if !unique.contains(&prop) {
                unique.push(prop);
            }
        }

        ComponentInfo {
            name,
            file_path: self.file_path.to_path_buf(),
            props: unique,
            line,
            kind,
        }
    }

    /// Create a usage record positioned at `node`
    pub fn create_usage(&self, node: &Node, value: String) -> PropUsage {
        PropUsage {
            line: self.line_of(node),
            value,
        }
    }
}
