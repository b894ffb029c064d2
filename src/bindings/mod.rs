// PyO3 Bindings Module
//
// Python bindings for the prop tracer. Wraps the Rust records
// (ComponentInfo, PropNode, PropTrace) in read-only PyO3 classes.

mod api;
mod trace;
mod tracer;

// Re-export for lib.rs
pub use api::{detect_language, hash_content, supported_languages};
pub use trace::{PyComponentInfo, PyPropNode, PyPropTrace};
pub use tracer::PyPropTracer;

use crate::error::TraceError;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyTimeoutError, PyValueError};
use pyo3::PyErr;

/// Map host-level trace failures onto the closest Python exception
pub(crate) fn to_py_err(err: TraceError) -> PyErr {
    let message = err.to_string();
    match err {
        TraceError::Io { .. } => PyIOError::new_err(message),
        TraceError::TimedOut { .. } => PyTimeoutError::new_err(message),
        TraceError::UnsupportedLanguage(_) | TraceError::Config(_) => {
            PyValueError::new_err(message)
        }
        TraceError::Parser(_) | TraceError::Search(_) | TraceError::Cancelled => {
            PyRuntimeError::new_err(message)
        }
    }
}
