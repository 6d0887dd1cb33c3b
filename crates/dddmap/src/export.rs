//! Export functionality for dddmap diagrams.
//!
//! # Pipeline Position
//!
//! ```text
//! Entity declarations
//!     ↓ structure (classify fields, resolve targets)
//! EntityGraph
//!     ↓ export (this module)
//! Graphviz DOT text
//! ```
//!
//! # Available Backends
//!
//! - [`dot`] - Graphviz DOT output with HTML-like table labels via [`dot::DotExporter`]

/// Graphviz DOT export backend.
pub mod dot;
