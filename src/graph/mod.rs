// Prop Lineage Graph Module
//
// Assembles the chain of components a prop value passes through, from the
// originating literal to the component being inspected:
// - types: PropNode / PropTrace output records
// - classify: attribute value classification driving continuation
// - builder: the hop-by-hop traversal over workspace usages

mod builder;
mod classify;
mod types;

pub use builder::{CancellationToken, PropTracer};
pub use classify::{classify_value, ValueKind};
pub use types::{Classification, PropNode, PropTrace};
