// API Functions - PyO3-exposed helper functions
//
// Free functions that need no tracer instance.

use crate::extractors::ExtractorManager;
use crate::language::detect_language_from_path;
use pyo3::prelude::*;
use std::path::Path;

/// Detect the grammar used for a file
///
/// Args:
///     file_path (str): File path with extension (e.g., "Button.tsx")
///
/// Returns:
///     str | None: "typescript", "tsx" or "javascript"; None for other files
#[pyfunction]
#[pyo3(signature = (file_path))]
pub fn detect_language(file_path: &str) -> Option<String> {
    detect_language_from_path(Path::new(file_path)).map(str::to_string)
}

/// Get list of all supported languages
#[pyfunction]
pub fn supported_languages() -> Vec<String> {
    ExtractorManager::new()
        .supported_languages()
        .iter()
        .map(|&s| s.to_string())
        .collect()
}

/// Compute the blake3 hash used to validate cached parses
///
/// Returns:
///     str: 64-character hex digest
#[pyfunction]
pub fn hash_content(content: &str) -> String {
    crate::syntax::hash_content(content).to_hex().to_string()
}
