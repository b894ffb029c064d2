// Base Extractor Types
//
// Data structures produced by component extraction: declared components and
// the attribute values found at their usage sites.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reserved value reported when a tag forwards props through a spread
/// attribute and the requested prop has no explicit attribute
pub const SPREAD_SENTINEL: &str = "{...spread}";

/// A declared UI component
///
/// Built fresh on every extraction call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Component identifier, always starting with an uppercase letter
    pub name: String,
    /// File the component is declared in
    pub file_path: PathBuf,
    /// Resolved prop names, unique, in resolution order
    pub props: Vec<String>,
    /// 1-based line of the `function` keyword or the variable statement
    pub line: u32,
    /// How the component was declared
    pub kind: ComponentKind,
}

impl ComponentInfo {
    pub fn has_prop(&self, prop: &str) -> bool {
        self.props.iter().any(|p| p == prop)
    }
}

/// Declaration styles recognized as components
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", tag = "type", content = "wrapper")]
pub enum ComponentKind {
    /// `function Button(props) {}`
    Function,
    /// `const Button = (props) => {}` or a function expression
    Variable,
    /// `const Button = memo((props) => {})`; carries the wrapper name
    Wrapped(String),
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Function => write!(f, "function"),
            ComponentKind::Variable => write!(f, "variable"),
            ComponentKind::Wrapped(wrapper) => write!(f, "{}", wrapper),
        }
    }
}

/// The value passed for a prop at one tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PropUsage {
    /// 1-based line of the attribute (or of the tag, for a spread)
    pub line: u32,
    /// `"true"` for a bare attribute, the quoted literal for strings, the
    /// unparsed expression text for `{...}` values, or [`SPREAD_SENTINEL`]
    pub value: String,
}

impl PropUsage {
    pub fn is_spread(&self) -> bool {
        self.value == SPREAD_SENTINEL
    }
}
