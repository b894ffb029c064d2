//! Tracer configuration
//!
//! Mirrors the settings the editor host exposes. Every key is optional;
//! missing keys take their defaults and unknown keys are ignored.

use crate::error::{Result, TraceError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Default number of hops a trace may take
pub const DEFAULT_MAX_TRACE_DEPTH: usize = 20;

/// Default wall-clock budget for a trace, in milliseconds
pub const DEFAULT_TRACE_TIMEOUT_MS: u64 = 5_000;

/// Configuration for prop tracing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraceConfig {
    /// Maximum number of hops away from the definition
    pub max_trace_depth: usize,
    /// Overall wall-clock budget in milliseconds (0 disables the timeout)
    pub trace_timeout: u64,
    /// Skip usage sites already visited in the same trace
    pub detect_cycles: bool,
    /// Glob patterns excluded from workspace search
    pub exclude: Vec<String>,
    /// File extensions searched for tag usages
    pub extensions: Vec<String>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_trace_depth: DEFAULT_MAX_TRACE_DEPTH,
            trace_timeout: DEFAULT_TRACE_TIMEOUT_MS,
            detect_cycles: true,
            exclude: vec![
                "**/node_modules/**".to_string(),
                "**/dist/**".to_string(),
                "**/build/**".to_string(),
            ],
            extensions: crate::language::SUPPORTED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl TraceConfig {
    /// Parse a JSON settings object
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TraceError::Config(e.to_string()))
    }

    /// Load settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TraceError::io(path, e))?;
        let config = Self::from_json_str(&content)?;
        debug!("Loaded trace config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Wall-clock budget, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        if self.trace_timeout == 0 {
            None
        } else {
            Some(Duration::from_millis(self.trace_timeout))
        }
    }

    /// Builder-style depth override
    pub fn with_max_depth(mut self, max_trace_depth: usize) -> Self {
        self.max_trace_depth = max_trace_depth;
        self
    }
}
