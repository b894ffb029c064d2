//! Error types for the tracer's public API.
//!
//! Only host-level faults live here. "Nothing further to trace" conditions
//! (no usage, spread ambiguity, depth exhaustion) are recorded in the
//! returned `PropTrace` instead.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can escape `PropTracer` and `Workspace` calls.
#[derive(Debug, Error)]
pub enum TraceError {
    /// A file passed in explicitly could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension maps to no known grammar.
    #[error("Unsupported file type: {0}")]
    UnsupportedLanguage(PathBuf),

    /// The tree-sitter grammar could not be loaded.
    #[error("Parser error: {0}")]
    Parser(String),

    /// The workspace search collaborator failed.
    #[error("Workspace search failed: {0}")]
    Search(String),

    /// The caller cancelled the trace.
    #[error("Trace cancelled")]
    Cancelled,

    /// The trace ran past its wall-clock budget.
    #[error("Trace timed out after {elapsed:?} (budget {budget:?})")]
    TimedOut { elapsed: Duration, budget: Duration },

    /// Configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl TraceError {
    /// Create an I/O error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a search error.
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search(message.into())
    }
}

impl From<anyhow::Error> for TraceError {
    fn from(err: anyhow::Error) -> Self {
        TraceError::Parser(format!("{:#}", err))
    }
}

/// Result alias used across the crate.
pub type Result<T, E = TraceError> = std::result::Result<T, E>;
