// Proptrace Core - static prop lineage tracing for TSX/JSX
//
// Answers "where did the value of this prop come from?" by walking tag
// usages across a workspace, without building or running the app.
// Architecture: tree-sitter for parsing, a shared parse cache per workspace,
// and a sequential hop-by-hop tracer on top.

pub mod config;
pub mod error;
pub mod extractors;
pub mod graph;
pub mod language;
pub mod syntax;
pub mod utils;
pub mod workspace;

// PyO3 bindings layer (optional)
#[cfg(feature = "python")]
pub mod bindings;

pub use config::TraceConfig;
pub use error::{Result, TraceError};
pub use extractors::{ComponentInfo, ComponentKind, ExtractorManager, PropUsage, SPREAD_SENTINEL};
pub use graph::{CancellationToken, Classification, PropNode, PropTrace, PropTracer};
pub use syntax::SourceFile;
pub use workspace::{
    DiskFileAccessor, FileAccessor, FsWorkspaceSearch, TagLocation, Workspace, WorkspaceSearch,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Proptrace Core Python module
///
/// Exposes the prop tracer for TypeScript, TSX and JavaScript workspaces.
#[cfg(feature = "python")]
#[pymodule]
fn proptrace_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::detect_language, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::supported_languages, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::hash_content, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyPropTracer>()?;
    m.add_class::<bindings::PyPropTrace>()?;
    m.add_class::<bindings::PyPropNode>()?;
    m.add_class::<bindings::PyComponentInfo>()?;

    Ok(())
}
