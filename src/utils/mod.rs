// Proptrace Utilities Module
//
// Common helpers shared by the workspace layer and the search collaborator.

/// File utilities
pub mod file_utils {
    use std::path::{Component, Path, PathBuf};

    /// Check if a file has an extension the tracer can parse
    pub fn is_supported_file(path: &Path) -> bool {
        crate::language::detect_language_from_path(path).is_some()
    }

    /// Check a file against an explicit extension allow-list
    pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|allowed| allowed == ext))
            .unwrap_or(false)
    }

    /// Resolve `file_path` against `root` and fold `.`/`..` components
    ///
    /// Works for files that do not exist (overlay buffers), so it never
    /// touches the filesystem.
    pub fn normalize_path(file_path: &Path, root: &Path) -> PathBuf {
        let joined = if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            root.join(file_path)
        };

        let mut normalized = PathBuf::new();
        for component in joined.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other.as_os_str()),
            }
        }
        normalized
    }
}
