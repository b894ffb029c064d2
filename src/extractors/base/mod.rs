// Base Extractor Types and Traits
//
// Split into:
// - types.rs: ComponentInfo, ComponentKind, PropUsage
// - extractor.rs: BaseExtractor (node text and positions)
// - tree_methods.rs: Tree navigation and traversal methods
// - creation_methods.rs: Record constructors

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{ComponentInfo, ComponentKind, PropUsage, SPREAD_SENTINEL};
