// PyPropTrace / PyPropNode / PyComponentInfo - PyO3 wrappers for trace output
//
// All fields are read-only from Python.

use crate::extractors::ComponentInfo;
use crate::graph::{PropNode, PropTrace};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// One hop in a lineage chain
#[pyclass(name = "PropNode")]
#[derive(Clone)]
pub struct PyPropNode {
    inner: PropNode,
}

#[pymethods]
impl PyPropNode {
    #[getter]
    fn component(&self) -> String {
        self.inner.component.clone()
    }

    #[getter]
    fn file_path(&self) -> String {
        self.inner.file_path.to_string_lossy().into_owned()
    }

    #[getter]
    fn prop(&self) -> String {
        self.inner.prop.clone()
    }

    #[getter]
    fn line(&self) -> u32 {
        self.inner.line
    }

    /// "SOURCE", "USAGE" or "DEFINITION"
    #[getter]
    fn classification(&self) -> String {
        match self.inner.classification {
            crate::graph::Classification::Source => "SOURCE",
            crate::graph::Classification::Usage => "USAGE",
            crate::graph::Classification::Definition => "DEFINITION",
        }
        .to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "PropNode({}.{} at {}:{}, {})",
            self.inner.component,
            self.inner.prop,
            self.inner.file_path.display(),
            self.inner.line,
            self.classification()
        )
    }
}

/// Result of tracing one prop back to its origin
#[pyclass(name = "PropTrace")]
pub struct PyPropTrace {
    inner: PropTrace,
}

impl PyPropTrace {
    pub fn from_trace(trace: PropTrace) -> Self {
        PyPropTrace { inner: trace }
    }
}

#[pymethods]
impl PyPropTrace {
    #[getter]
    fn prop(&self) -> String {
        self.inner.prop.clone()
    }

    #[getter]
    fn chain(&self) -> Vec<PyPropNode> {
        self.inner
            .chain
            .iter()
            .cloned()
            .map(|inner| PyPropNode { inner })
            .collect()
    }

    #[getter]
    fn is_complete(&self) -> bool {
        self.inner.is_complete
    }

    #[getter]
    fn ambiguous(&self) -> bool {
        self.inner.ambiguous
    }

    /// True when the trace stopped at an already visited usage site
    #[getter]
    fn cyclic(&self) -> bool {
        self.inner.cyclic
    }

    fn render_path(&self) -> String {
        self.inner.render_path()
    }

    /// Serialize with the same camelCase shape the editor host consumes
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "PropTrace({}, complete={}, ambiguous={}, cyclic={})",
            self.inner.render_path(),
            self.inner.is_complete,
            self.inner.ambiguous,
            self.inner.cyclic
        )
    }
}

/// A declared component and its resolved props
#[pyclass(name = "ComponentInfo")]
pub struct PyComponentInfo {
    inner: ComponentInfo,
}

impl PyComponentInfo {
    pub fn from_component(component: ComponentInfo) -> Self {
        PyComponentInfo { inner: component }
    }
}

#[pymethods]
impl PyComponentInfo {
    #[getter]
    fn name(&self) -> String {
        self.inner.name.clone()
    }

    #[getter]
    fn file_path(&self) -> String {
        self.inner.file_path.to_string_lossy().into_owned()
    }

    #[getter]
    fn props(&self) -> Vec<String> {
        self.inner.props.clone()
    }

    #[getter]
    fn line(&self) -> u32 {
        self.inner.line
    }

    /// "function", "variable", or the wrapper name ("memo", "forwardRef", ...)
    #[getter]
    fn kind(&self) -> String {
        self.inner.kind.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "ComponentInfo({}, props={:?}, line={})",
            self.inner.name, self.inner.props, self.inner.line
        )
    }
}
