//! Workspace Search - where is `<TagName` written?
//!
//! The default implementation is lexical: it matches the raw text `<TagName`
//! followed by whitespace, `/`, `>` or end of line, without filtering
//! matches inside comments, strings or generic type arguments
//! (`useState<Item>()`). Such false positives are harmless to the lineage
//! builder: when no JSX tag sits near the reported line the candidate simply
//! does not resolve.

use super::Workspace;
use crate::config::TraceConfig;
use crate::error::{Result, TraceError};
use crate::utils::file_utils::{has_extension, is_supported_file};
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-directory ignore file, gitignore syntax
pub const IGNORE_FILE_NAME: &str = ".proptraceignore";

/// One place a tag name was written
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagLocation {
    pub file_path: PathBuf,
    /// 1-based line of the `<`
    pub line: u32,
}

/// Finds candidate usage sites of a component tag
///
/// Implementations must return the same order for the same input for the
/// lifetime of a trace.
pub trait WorkspaceSearch: Send + Sync {
    fn find_tag_usages(&self, tag_name: &str) -> Result<Vec<TagLocation>>;
}

/// Build the raw-text matcher for `<TagName`
pub fn tag_pattern(tag_name: &str) -> Result<Regex> {
    Regex::new(&format!(r"<{}(?:[\s/>]|$)", regex::escape(tag_name)))
        .map_err(|e| TraceError::search(format!("Invalid tag name '{}': {}", tag_name, e)))
}

/// Every 1-based line of `content` containing a match, one entry per line
pub fn scan_content(content: &str, pattern: &Regex) -> Vec<u32> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| pattern.is_match(line))
        .map(|(index, _)| index as u32 + 1)
        .collect()
}

/// Lexical search over the files under the workspace root
///
/// Honors `.gitignore`, per-directory `.proptraceignore` files and the configured
/// exclude globs; overlay buffers are searched with their unsaved text.
pub struct FsWorkspaceSearch {
    workspace: Arc<Workspace>,
    exclude: Vec<glob::Pattern>,
    extensions: Vec<String>,
}

impl FsWorkspaceSearch {
    pub fn new(workspace: Arc<Workspace>, config: &TraceConfig) -> Result<Self> {
        let exclude = config
            .exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|e| {
                    TraceError::Config(format!("Invalid exclude pattern '{}': {}", pattern, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            workspace,
            exclude,
            extensions: config.extensions.clone(),
        })
    }

    fn is_candidate(&self, path: &Path) -> bool {
        // Configured extensions the parser cannot handle are never searched
        if !has_extension(path, &self.extensions) || !is_supported_file(path) {
            return false;
        }
        let relative = path.strip_prefix(self.workspace.root()).unwrap_or(path);
        !self
            .exclude
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(relative))
    }

    /// Sorted list of files to scan: walked files plus overlay-only buffers
    fn candidate_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = ignore::WalkBuilder::new(self.workspace.root())
            .add_custom_ignore_filename(IGNORE_FILE_NAME)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|entry| entry.into_path())
            .collect();

        // Overlays of files on disk were already walked, or were ignored
        files.extend(
            self.workspace
                .overlay_paths()
                .into_iter()
                .filter(|path| !path.exists()),
        );
        files.retain(|path| self.is_candidate(path));
        files.sort();
        files.dedup();
        files
    }
}

impl WorkspaceSearch for FsWorkspaceSearch {
    fn find_tag_usages(&self, tag_name: &str) -> Result<Vec<TagLocation>> {
        let pattern = tag_pattern(tag_name)?;
        let files = self.candidate_files();

        // Order is preserved by the indexed parallel iterator
        let per_file: Vec<Vec<TagLocation>> = files
            .par_iter()
            .map(|path| match self.workspace.read(path) {
                Ok(content) => scan_content(&content, &pattern)
                    .into_iter()
                    .map(|line| TagLocation {
                        file_path: path.clone(),
                        line,
                    })
                    .collect(),
                Err(e) => {
                    warn!("Skipping {} during tag search: {}", path.display(), e);
                    Vec::new()
                }
            })
            .collect();

        let locations: Vec<TagLocation> = per_file.into_iter().flatten().collect();
        debug!(
            "Found {} candidate usages of <{}> across {} files",
            locations.len(),
            tag_name,
            files.len()
        );
        Ok(locations)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_tag_pattern_boundaries() {
        let pattern = tag_pattern("Child").unwrap();
        let content = "<Child/>\n<Child label=\"a\">\n<ChildItem />\n</Child>\n<Child\n  x={1}\n/>";
        assert_eq!(scan_content(content, &pattern), vec![1, 2, 5]);
    }

    #[test]
    fn test_tag_pattern_escapes_member_names() {
        let pattern = tag_pattern("UI.Button").unwrap();
        assert_eq!(scan_content("<UI.Button />\n<UIxButton />", &pattern), vec![1]);
    }

    #[test]
    fn test_lexical_false_positives_are_reported() {
        let pattern = tag_pattern("Child").unwrap();
        let content = "// render <Child /> here\nconst s = \"<Child>\";";
        assert_eq!(scan_content(content, &pattern), vec![1, 2]);
    }

    #[test]
    fn test_fs_search_is_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/b")).unwrap();
        fs::create_dir_all(root.join("node_modules/lib")).unwrap();
        fs::write(root.join("src/b/Page.tsx"), "const Page = () => <Card />;\n").unwrap();
        fs::write(
            root.join("src/App.tsx"),
            "const App = () => (\n  <Card title=\"x\" />\n);\n",
        )
        .unwrap();
        fs::write(root.join("src/notes.md"), "<Card />").unwrap();
        fs::write(root.join("node_modules/lib/Card.js"), "<Card />").unwrap();

        let workspace = Arc::new(Workspace::new(root));
        let search = FsWorkspaceSearch::new(workspace, &TraceConfig::default()).unwrap();
        let usages = search.find_tag_usages("Card").unwrap();

        let found: Vec<(String, u32)> = usages
            .iter()
            .map(|u| {
                (
                    u.file_path
                        .strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .replace('\\', "/"),
                    u.line,
                )
            })
            .collect();
        assert_eq!(
            found,
            vec![("src/App.tsx".to_string(), 2), ("src/b/Page.tsx".to_string(), 1)]
        );

        // Stable across calls
        assert_eq!(search.find_tag_usages("Card").unwrap(), usages);
    }

    #[test]
    fn test_fs_search_sees_overlays_and_ignore_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("stories")).unwrap();
        fs::write(root.join("App.tsx"), "const App = () => null;\n").unwrap();
        fs::write(root.join("stories/Card.stories.tsx"), "<Card />\n").unwrap();
        fs::write(root.join(".proptraceignore"), "stories/\n").unwrap();

        let workspace = Arc::new(Workspace::new(root));
        let search = FsWorkspaceSearch::new(workspace.clone(), &TraceConfig::default()).unwrap();
        assert!(search.find_tag_usages("Card").unwrap().is_empty());

        workspace.set_overlay(&root.join("App.tsx"), "const App = () => <Card />;\n");
        let usages = search.find_tag_usages("Card").unwrap();
        assert_eq!(usages.len(), 1);
        assert_eq!(usages[0].file_path, workspace.normalize(&root.join("App.tsx")));
    }

    #[test]
    fn test_ignore_file_uses_gitignore_rules() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/gen")).unwrap();
        fs::write(root.join(".proptraceignore"), "*.generated.tsx\n").unwrap();
        fs::write(root.join("src/gen/.proptraceignore"), "*\n!Keep.tsx\n").unwrap();
        fs::write(root.join("src/Form.generated.tsx"), "<Card />\n").unwrap();
        fs::write(root.join("src/gen/Drop.tsx"), "<Card />\n").unwrap();
        fs::write(root.join("src/gen/Keep.tsx"), "<Card />\n").unwrap();
        fs::write(root.join("src/Page.tsx"), "<Card />\n").unwrap();

        let workspace = Arc::new(Workspace::new(root));
        let search = FsWorkspaceSearch::new(workspace.clone(), &TraceConfig::default()).unwrap();

        // An overlay of an ignored file on disk stays ignored
        workspace.set_overlay(&root.join("src/gen/Drop.tsx"), "<Card title=\"x\" />\n");

        let files: Vec<PathBuf> = search
            .find_tag_usages("Card")
            .unwrap()
            .into_iter()
            .map(|u| u.file_path)
            .collect();
        assert_eq!(
            files,
            vec![root.join("src/Page.tsx"), root.join("src/gen/Keep.tsx")]
                .iter()
                .map(|p| workspace.normalize(p))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_invalid_exclude_pattern_is_config_error() {
        let dir = TempDir::new().unwrap();
        let mut config = TraceConfig::default();
        config.exclude = vec!["[".to_string()];
        let result = FsWorkspaceSearch::new(Arc::new(Workspace::new(dir.path())), &config);
        assert!(matches!(result, Err(TraceError::Config(_))));
    }
}
