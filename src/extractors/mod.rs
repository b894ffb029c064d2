//! Component Extractors Module
//!
//! Tree-sitter based extraction of UI components, their props, and the
//! attribute values passed to them at tag usage sites.
//!
//! # Architecture
//!
//! - `base` - Shared record types and tree navigation helpers
//! - `react` - TSX/JSX component and prop-usage extractor
//! - `manager` - ExtractorManager public API

pub mod base;
pub mod manager;
pub mod react;

// Re-export the public API
pub use base::{ComponentInfo, ComponentKind, PropUsage, SPREAD_SENTINEL};
pub use manager::ExtractorManager;
