//! ExtractorManager - Public API for component and prop-usage extraction
//!
//! Parsing and caching belong to the workspace; the manager takes already
//! parsed files and delegates to the component extractor. Callers that hold
//! raw text instead can go through `extract_components_from_content`.

use crate::error::Result;
use crate::extractors::base::{ComponentInfo, PropUsage};
use crate::extractors::react::ReactExtractor;
use crate::language::supports_jsx;
use crate::syntax::SourceFile;
use std::path::Path;

/// Manager for component extraction
/// Every supported language shares the same JSX-aware extractor
pub struct ExtractorManager {
    // No state needed - this is a stateless manager
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Languages the extractor understands
    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["typescript", "tsx", "javascript", "jsx"]
    }

    /// Components declared in `source`, in document order
    ///
    /// A file with any syntax error gives an empty list.
    pub fn list_components(&self, source: &SourceFile) -> Vec<ComponentInfo> {
        if source.has_errors() {
            tracing::warn!(
                "No components listed for {} (file has syntax errors)",
                source.path().display()
            );
        }
        ReactExtractor::new(source).extract_components()
    }

    /// First value passed for `prop` on any `<component>` tag in `source`
    pub fn find_prop_usage(
        &self,
        source: &SourceFile,
        component: &str,
        prop: &str,
    ) -> Option<PropUsage> {
        if !supports_jsx(source.language()) {
            return None;
        }
        ReactExtractor::new(source).find_prop_usage(component, prop)
    }

    /// Value passed for `prop` on the `<component>` tag nearest to `line`
    pub fn find_prop_usage_near(
        &self,
        source: &SourceFile,
        component: &str,
        prop: &str,
        line: u32,
    ) -> Option<PropUsage> {
        // Plain .ts files cannot contain tags; any search hit there is a generic or a comparison
        if !supports_jsx(source.language()) {
            return None;
        }
        let usage = ReactExtractor::new(source).find_prop_usage_near(component, prop, line);

        tracing::debug!(
            "Usage of {}.{} near {}:{}: {:?}",
            component,
            prop,
            source.path().display(),
            line,
            usage.as_ref().map(|u| u.value.as_str())
        );
        usage
    }

    /// Parse `content` as the file at `file_path` and list its components
    ///
    /// Bypasses the workspace cache entirely.
    pub fn extract_components_from_content(
        &self,
        file_path: &Path,
        content: &str,
    ) -> Result<Vec<ComponentInfo>> {
        let source = SourceFile::parse(file_path, content.to_string())?;
        Ok(self.list_components(&source))
    }
}
