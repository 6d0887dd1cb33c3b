//! Configuration types for dddmap diagram rendering.
//!
//! This module provides configuration structures that control how entity
//! tables are built and styled. All types implement [`serde::Deserialize`]
//! and can be loaded from TOML with [`AppConfig::from_toml_str`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`TableConfig`] - Padding row width and name row color.
//! - [`StyleConfig`] - Cell colors per entity kind.
//! - [`GraphConfig`] - Graph name and layout direction.
//!
//! # Example
//!
//! ```
//! # use dddmap::config::AppConfig;
//! let config = AppConfig::from_toml_str(
//!     r#"
//!     [table]
//!     blank_row_width = 3
//!
//!     [graph]
//!     rankdir = "TB"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.table().blank_row_width(), 3);
//! assert_eq!(config.graph().rankdir(), "TB");
//! ```

use serde::Deserialize;

use dddmap_core::color::Color;

pub use dddmap_core::table::TableConfig;

use crate::{DddmapError, model::EntityKind};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Table construction section.
    #[serde(default)]
    table: TableConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Graph attributes section.
    #[serde(default)]
    graph: GraphConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(table: TableConfig, style: StyleConfig, graph: GraphConfig) -> Self {
        Self {
            table,
            style,
            graph,
        }
    }

    /// Parses a configuration from TOML text.
    ///
    /// Missing sections and keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DddmapError::Config`] if the text is not valid TOML or does
    /// not match the configuration layout.
    pub fn from_toml_str(content: &str) -> Result<Self, DddmapError> {
        toml::from_str(content)
            .map_err(|err| DddmapError::Config(format!("Failed to parse TOML configuration: {err}")))
    }

    pub fn table(&self) -> &TableConfig {
        &self.table
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }
}

/// Cell colors of rendered entity tables.
///
/// Every color is a CSS color string; it is validated when resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Field-name cell color of aggregate roots.
    aggregate_root_color: String,

    /// Field-name cell color of entities.
    entity_color: String,

    /// Field-name cell color of value objects.
    value_object_color: String,

    /// Field-type cell color.
    field_color: String,
}

impl StyleConfig {
    /// Returns the validated color for field-name cells of `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn kind_color(&self, kind: EntityKind) -> Result<Color, String> {
        let color = match kind {
            EntityKind::AggregateRoot => &self.aggregate_root_color,
            EntityKind::Entity => &self.entity_color,
            EntityKind::ValueObject => &self.value_object_color,
        };
        Color::new(color).map_err(|err| format!("Invalid {kind} color in config: {err}"))
    }

    /// Returns the validated color for field-type cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is not a valid color.
    pub fn field_color(&self) -> Result<Color, String> {
        Color::new(&self.field_color).map_err(|err| format!("Invalid field color in config: {err}"))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            aggregate_root_color: "gold".to_string(),
            entity_color: "lightblue".to_string(),
            value_object_color: "lightgreen".to_string(),
            field_color: "white".to_string(),
        }
    }
}

/// Attributes of the emitted graph.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Graph identifier.
    name: String,

    /// Layout direction: `TB`, `LR`, `BT` or `RL`.
    rankdir: String,
}

impl GraphConfig {
    pub fn new(name: impl Into<String>, rankdir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rankdir: rankdir.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rankdir(&self) -> &str {
        &self.rankdir
    }

    /// Checks that [`GraphConfig::rankdir`] is a known direction.
    ///
    /// # Errors
    ///
    /// Returns an error naming the rejected direction.
    pub fn validate(&self) -> Result<(), String> {
        match self.rankdir.as_str() {
            "TB" | "LR" | "BT" | "RL" => Ok(()),
            other => Err(format!("Invalid rankdir `{other}` in config")),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new("dddmap", "LR")
    }
}
