//! Error types for type expression analysis.

use std::fmt;

use thiserror::Error;

/// Slot of a map type that held an unsupported nested map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPosition {
    Key,
    Value,
}

impl fmt::Display for MapPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Value => write!(f, "value"),
        }
    }
}

/// Failure to turn a type expression into relations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// A map whose key or value is itself a map.
    #[error("unsupported nesting: map {position} is itself a map")]
    UnsupportedNesting { position: MapPosition },
}

/// Failure to parse a textual type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at offset {offset}")]
pub struct ParseError {
    offset: usize,
    message: String,
}

impl ParseError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }

    /// Byte offset into the source where parsing failed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
