//! TSX/JSX component extractor with modular architecture
//!
//! Reads one parsed file and answers two questions: which declarations are
//! components (and which props they accept), and what a given tag passes for
//! a given prop.
//!
//! - **components**: candidate selection and declaration lines
//! - **props**: the ordered prop-name resolution rules
//! - **types**: recursive interface / alias / union / intersection resolution
//! - **usages**: tag and attribute matching, spread detection
//! - **helpers**: naming conventions and node-shape checks

mod components;
mod helpers;
mod props;
mod types;
mod usages;

use crate::extractors::base::{BaseExtractor, ComponentInfo, PropUsage};
use crate::syntax::SourceFile;
use tracing::debug;
use tree_sitter::Node;

/// Component extractor over one parsed file
pub struct ReactExtractor<'a> {
    base: BaseExtractor<'a>,
    root: Node<'a>,
}

impl<'a> ReactExtractor<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            base: BaseExtractor::new(source),
            root: source.tree().root_node(),
        }
    }

    /// Every component declared at top level, in document order
    pub fn extract_components(&self) -> Vec<ComponentInfo> {
        let resolver = types::TypeResolver::new(&self.base, self.root);
        let components: Vec<ComponentInfo> = components::find_candidates(&self.base, self.root)
            .into_iter()
            .map(|candidate| {
                let props = props::resolve_props(&self.base, &candidate, &resolver);
                self.base
                    .create_component(candidate.name, candidate.kind, candidate.line, props)
            })
            .collect();

        debug!(
            "Extracted {} components from {} file: {}",
            components.len(),
            self.base.language,
            self.base.file_path.display()
        );
        components
    }

    /// Value passed for `prop` on the first `<component>` tag that sets it
    pub fn find_prop_usage(&self, component: &str, prop: &str) -> Option<PropUsage> {
        usages::find_prop_usage(&self.base, self.root, component, prop)
    }

    /// Value passed for `prop` on the `<component>` tag nearest to `line`
    pub fn find_prop_usage_near(&self, component: &str, prop: &str, line: u32) -> Option<PropUsage> {
        usages::find_prop_usage_near(&self.base, self.root, component, prop, line)
    }
}
