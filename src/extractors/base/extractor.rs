// BaseExtractor implementation
//
// Shared node-text and position helpers for every extraction pass over one
// parsed file.

use std::path::Path;
use tree_sitter::Node;

use crate::syntax::SourceFile;

/// Base implementation for extraction passes
///
/// Borrows the parsed file, so extractors are cheap to create per call.
pub struct BaseExtractor<'a> {
    pub language: &'a str,
    pub file_path: &'a Path,
    pub content: &'a str,
}

impl<'a> BaseExtractor<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            language: source.language(),
            file_path: source.path(),
            content: source.content(),
        }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        // Use byte slice but handle UTF-8 boundaries properly
        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// 1-based line a node starts on
    pub fn line_of(&self, node: &Node) -> u32 {
        node.start_position().row as u32 + 1
    }

    /// Property or attribute name with surrounding quotes removed
    ///
    /// `'aria-label'` and `"aria-label"` both become `aria-label`.
    pub fn get_key_text(&self, node: &Node) -> String {
        let text = self.get_node_text(node);
        let trimmed = text.trim();
        for quote in ['"', '\'', '`'] {
            if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
                return trimmed[1..trimmed.len() - 1].to_string();
            }
        }
        trimmed.to_string()
    }
}
