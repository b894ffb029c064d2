// Lineage output types
//
// A trace is plain data: once built it holds no reference into any parsed
// tree, so it can be cached, serialized, or sent across threads freely.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Role of one hop in a finished chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// Where the value originates
    Source,
    /// An intermediate component forwarding the value
    Usage,
    /// The component/prop the trace was requested for
    Definition,
}

/// One hop in a lineage chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropNode {
    pub component: String,
    pub file_path: PathBuf,
    /// Prop name at this hop; renames across hops show up here
    pub prop: String,
    /// 1-based; the usage line for hops, the declaration line for the start
    pub line: u32,
    pub classification: Classification,
}

/// Result of tracing one prop back to its origin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropTrace {
    /// The prop name the trace was requested for
    pub prop: String,
    /// Origin first, requested component last; never empty
    pub chain: Vec<PropNode>,
    /// False only when the depth bound cut the trace short
    ///
    /// A trace stopped by cycle detection is complete; check `cyclic`.
    pub is_complete: bool,
    /// True when some hop went through a spread attribute
    pub ambiguous: bool,
    /// True when the walk stopped because every remaining usage site was
    /// already visited. The first node is then a re-entry into the loop,
    /// not a value origin.
    #[serde(default)]
    pub cyclic: bool,
}

impl PropTrace {
    /// Where the value originates
    pub fn source(&self) -> Option<&PropNode> {
        self.chain.first()
    }

    /// The requested component/prop
    ///
    /// For a single-node chain this is the same node as [`PropTrace::source`].
    pub fn definition(&self) -> Option<&PropNode> {
        self.chain.last()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Number of component boundaries crossed
    pub fn hops(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    /// `Parent.heading → Child.title`
    pub fn render_path(&self) -> String {
        self.chain
            .iter()
            .map(|node| format!("{}.{}", node.component, node.prop))
            .collect::<Vec<_>>()
            .join(" → ")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
