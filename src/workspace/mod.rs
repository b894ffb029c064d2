//! Workspace - file access, unsaved buffers and the shared parse cache
//!
//! Every file read by the tracer goes through here. In-memory overlay text
//! (an editor's unsaved buffer) always wins over disk content, and setting
//! or clearing an overlay invalidates the cached tree for that path.

mod cache;
pub mod search;

pub use cache::ParseCache;
pub use search::{FsWorkspaceSearch, TagLocation, WorkspaceSearch};

use crate::error::{Result, TraceError};
use crate::syntax::SourceFile;
use crate::utils::file_utils::normalize_path;
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Reads file contents on behalf of the workspace
pub trait FileAccessor: Send + Sync {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Default accessor backed by the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFileAccessor;

impl FileAccessor for DiskFileAccessor {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// A set of files rooted at one directory
pub struct Workspace {
    root: PathBuf,
    accessor: Arc<dyn FileAccessor>,
    overlays: DashMap<PathBuf, String>,
    cache: ParseCache,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("root", &self.root)
            .field("overlays", &self.overlays.len())
            .field("cached_files", &self.cache.len())
            .finish()
    }
}

impl Workspace {
    /// Workspace reading from disk
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_accessor(root, Arc::new(DiskFileAccessor))
    }

    /// Workspace reading through a custom accessor
    ///
    /// A relative root is resolved against the current directory once, here,
    /// so every key and every walked path shares one absolute prefix.
    pub fn with_accessor(root: impl Into<PathBuf>, accessor: Arc<dyn FileAccessor>) -> Self {
        let root = root.into();
        let root = std::path::absolute(&root).unwrap_or(root);
        let root = normalize_path(&root, &root);
        Self {
            root,
            accessor,
            overlays: DashMap::new(),
            cache: ParseCache::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute, `.`/`..`-free form of `path`, used as the key everywhere
    pub fn normalize(&self, path: &Path) -> PathBuf {
        normalize_path(path, &self.root)
    }

    /// Current text of `path`, overlay first
    pub fn read(&self, path: &Path) -> Result<String> {
        self.read_key(&self.normalize(path))
    }

    /// Parsed snapshot of `path`, re-parsed only when its text changed
    pub fn source(&self, path: &Path) -> Result<Arc<SourceFile>> {
        let key = self.normalize(path);
        let content = self.read_key(&key)?;
        self.cache.get_or_parse(&key, content)
    }

    fn read_key(&self, key: &Path) -> Result<String> {
        if let Some(text) = self.overlays.get(key) {
            return Ok(text.value().clone());
        }
        self.accessor
            .read(key)
            .map_err(|e| TraceError::io(key, e))
    }

    /// Supply in-memory text for `path`; it shadows disk content until cleared
    pub fn set_overlay(&self, path: &Path, text: impl Into<String>) {
        let key = self.normalize(path);
        self.cache.invalidate(&key);
        debug!("Overlay set for {}", key.display());
        self.overlays.insert(key, text.into());
    }

    /// Drop the overlay for `path`, reverting to disk content
    pub fn clear_overlay(&self, path: &Path) -> bool {
        let key = self.normalize(path);
        self.cache.invalidate(&key);
        self.overlays.remove(&key).is_some()
    }

    /// Paths that currently have overlay text, sorted
    pub fn overlay_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.overlays.iter().map(|e| e.key().clone()).collect();
        paths.sort();
        paths
    }

    /// Number of parsed trees held by the cache
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains(&self.normalize(path))
    }

    /// Drop every parsed tree; overlays are kept
    pub fn clear_cache(&self) {
        debug!("Clearing {} cached files", self.cache.len());
        self.cache.clear();
    }
}
