//! Language Support - Shared tree-sitter language configuration
//!
//! This module provides centralized language support for the component-bearing
//! dialects the tracer understands. ALL grammar selection should go here to
//! avoid duplication between the parser, the workspace search and the bindings.

use anyhow::Result;
use std::path::Path;

/// Every file extension the tracer will parse or search.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "mts", "cts", "tsx", "js", "jsx", "mjs", "cjs"];

/// Get tree-sitter language parser for a given language name
///
/// This is the SINGLE SOURCE OF TRUTH for grammar selection.
///
/// # Supported Languages
///
/// - `typescript`: plain TypeScript (no JSX)
/// - `tsx`: TypeScript with JSX
/// - `javascript` / `jsx`: JavaScript, JSX included
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "typescript" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        "tsx" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "javascript" | "jsx" => Ok(tree_sitter_javascript::LANGUAGE.into()),

        _ => Err(anyhow::anyhow!(
            "Unsupported language: '{}'. Supported languages: typescript, tsx, javascript, jsx",
            language
        )),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("tsx"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("jsx"),
        _ => None,
    }
}

/// Detect language from a full path
pub fn detect_language_from_path(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_language_from_extension)
}

/// Whether the grammar for `language` can contain JSX tags
pub fn supports_jsx(language: &str) -> bool {
    matches!(language, "tsx" | "javascript" | "jsx")
}

/// Node kinds that introduce a function-like value a component can be built from
pub fn get_function_value_kinds() -> &'static [&'static str] {
    // Older grammars call function expressions plain "function"
    &["arrow_function", "function_expression", "function"]
}

/// Node kinds that declare a named type the prop resolver can follow
pub fn get_type_declaration_kinds() -> &'static [&'static str] {
    &["interface_declaration", "type_alias_declaration"]
}
