//! Error types for dddmap operations.
//!
//! This module provides the main error type [`DddmapError`] which wraps
//! the failures of parsing, classification and configuration.

use thiserror::Error;

use dddmap_parser::{ClassificationError, ParseError};

/// The main error type for dddmap operations.
#[derive(Debug, Error)]
pub enum DddmapError {
    #[error("Parse error in `{source_text}`: {err}")]
    Parse {
        source_text: String,
        #[source]
        err: ParseError,
    },

    #[error("Cannot classify field `{entity}.{field}`: {err}")]
    Classify {
        entity: String,
        field: String,
        #[source]
        err: ClassificationError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DddmapError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, source_text: impl Into<String>) -> Self {
        Self::Parse {
            source_text: source_text.into(),
            err,
        }
    }
}
