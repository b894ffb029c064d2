//! Syntax Model - one parsed source file
//!
//! A `SourceFile` owns its text, the tree-sitter tree parsed from that text and
//! a blake3 hash of the text. It is immutable: re-parsing always produces a
//! new `SourceFile`, which is what lets the parse cache hand out shared
//! snapshots while replacing entries underneath.

use crate::error::{Result, TraceError};
use crate::language::{detect_language_from_path, get_tree_sitter_language};
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// A parsed TypeScript/JavaScript file
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    language: &'static str,
    content: String,
    hash: blake3::Hash,
    tree: Tree,
}

impl SourceFile {
    /// Parse `content` as the file at `path`, picking the grammar from the extension
    pub fn parse(path: &Path, content: String) -> Result<Self> {
        let language = detect_language_from_path(path)
            .ok_or_else(|| TraceError::UnsupportedLanguage(path.to_path_buf()))?;

        let mut parser = Parser::new();
        let tree_sitter_language = get_tree_sitter_language(language)?;
        parser.set_language(&tree_sitter_language).map_err(|e| {
            TraceError::Parser(format!(
                "Failed to set parser language for {}: {}",
                language, e
            ))
        })?;

        let tree = parser
            .parse(&content, None)
            .ok_or_else(|| TraceError::Parser(format!("Failed to parse file: {}", path.display())))?;

        if tree.root_node().has_error() {
            debug!("Parsed {} with syntax errors", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            language,
            hash: hash_content(&content),
            content,
            tree,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// blake3 hash of the text this tree was parsed from
    pub fn hash(&self) -> blake3::Hash {
        self.hash
    }

    /// Whether tree-sitter had to recover from syntax errors
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Compute the blake3 hash used to validate cached trees
pub fn hash_content(content: &str) -> blake3::Hash {
    blake3::hash(content.as_bytes())
}
