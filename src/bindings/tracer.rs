// PyPropTracer - PyO3 wrapper around PropTracer
//
// Traces run with the GIL released; the tracer itself is shareable.

use super::{to_py_err, PyComponentInfo, PyPropTrace};
use crate::config::TraceConfig;
use crate::graph::PropTracer;
use pyo3::prelude::*;
use std::path::Path;

/// Prop tracer over a workspace on disk
///
/// Args:
///     root (str): Workspace root directory
///     config_json (str | None): Optional JSON config, camelCase keys
///         (maxTraceDepth, traceTimeout, detectCycles, exclude, extensions)
#[pyclass(name = "PropTracer")]
pub struct PyPropTracer {
    inner: PropTracer,
}

#[pymethods]
impl PyPropTracer {
    #[new]
    #[pyo3(signature = (root, config_json = None))]
    fn new(root: &str, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => TraceConfig::from_json_str(json).map_err(to_py_err)?,
            None => TraceConfig::default(),
        };
        let inner = PropTracer::for_root(root, config).map_err(to_py_err)?;
        Ok(PyPropTracer { inner })
    }

    /// Trace a prop of a component back to where its value originates
    ///
    /// Raises:
    ///     OSError: If file_path cannot be read
    ///     TimeoutError: If the trace exceeds traceTimeout
    fn build_prop_chain(
        &self,
        py: Python<'_>,
        file_path: &str,
        component: &str,
        prop: &str,
    ) -> PyResult<PyPropTrace> {
        let trace = py
            .detach(|| self.inner.build_prop_chain(Path::new(file_path), component, prop))
            .map_err(to_py_err)?;
        Ok(PyPropTrace::from_trace(trace))
    }

    /// Components declared in a file, in document order
    fn list_components(&self, py: Python<'_>, file_path: &str) -> PyResult<Vec<PyComponentInfo>> {
        let components = py
            .detach(|| self.inner.list_components(Path::new(file_path)))
            .map_err(to_py_err)?;
        Ok(components
            .into_iter()
            .map(PyComponentInfo::from_component)
            .collect())
    }

    /// Use unsaved editor text for a file until `clear_overlay` is called
    fn set_overlay(&self, file_path: &str, text: &str) {
        self.inner.workspace().set_overlay(Path::new(file_path), text);
    }

    fn clear_overlay(&self, file_path: &str) -> bool {
        self.inner.workspace().clear_overlay(Path::new(file_path))
    }

    #[getter]
    fn cached_files(&self) -> usize {
        self.inner.workspace().cached_files()
    }

    fn clear_cache(&self) {
        self.inner.workspace().clear_cache();
    }
}
