//! Parse cache keyed by file path
//!
//! Entries are `Arc<SourceFile>` snapshots. A re-parse never mutates an entry
//! in place: it builds a new `SourceFile` and swaps the `Arc`, so a trace that
//! already holds a snapshot keeps reading a consistent tree while another
//! request replaces it.

use crate::error::Result;
use crate::syntax::{hash_content, SourceFile};
use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ParseCache {
    entries: DashMap<PathBuf, Arc<SourceFile>>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached tree for `path` if it was parsed from `content`,
    /// otherwise parse `content` and replace the entry
    pub fn get_or_parse(&self, path: &Path, content: String) -> Result<Arc<SourceFile>> {
        let hash = hash_content(&content);

        // Clone out before inserting: holding a shard guard across insert deadlocks
        let cached = self.entries.get(path).map(|entry| Arc::clone(entry.value()));
        if let Some(cached) = cached {
            if cached.hash() == hash {
                return Ok(cached);
            }
            debug!("Content changed for {}, re-parsing", path.display());
        }

        let parsed = Arc::new(SourceFile::parse(path, content)?);
        self.entries.insert(path.to_path_buf(), Arc::clone(&parsed));
        Ok(parsed)
    }

    /// Drop the entry for `path`
    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
