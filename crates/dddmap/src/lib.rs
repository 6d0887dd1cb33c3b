//! dddmap - Domain model diagrams from type declarations.
//!
//! Classifies the declared field types of domain entities into one-to-one
//! and one-to-many relations, assembles them into an entity graph, and
//! renders the graph as Graphviz DOT with table-shaped nodes.

pub mod config;
pub mod model;

mod error;
mod export;
mod structure;

pub use dddmap_core::{color, relation, table};
pub use dddmap_parser::{ImportSpec, TypeExpr};

pub use error::DddmapError;
pub use export::dot::DotExporter;
pub use structure::{EntityGraph, RelationEdge};

use log::{debug, info};

use config::AppConfig;
use model::Entity;

/// Builder for assembling and rendering entity diagrams.
///
/// # Examples
///
/// ```rust
/// use dddmap::{DiagramBuilder, ImportSpec, model::{Entity, EntityKind, Field}};
///
/// let entities = vec![
///     Entity::new("example.com/sales", "Order")
///         .with_kind(EntityKind::AggregateRoot)
///         .with_import(ImportSpec::new("\"example.com/customer\""))
///         .with_field(Field::parse("buyer", "*customer.Customer").unwrap())
///         .with_field(Field::parse("lines", "[]Line").unwrap()),
///     Entity::new("example.com/sales", "Line"),
///     Entity::new("example.com/customer", "Customer"),
/// ];
///
/// let builder = DiagramBuilder::default();
/// let graph = builder.build_graph(&entities).expect("Failed to build graph");
/// assert_eq!(graph.relation_count(), 2);
///
/// let dot = builder.render_dot(&graph).expect("Failed to render");
/// assert!(dot.starts_with("digraph"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Table, style and graph settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Assemble the entity graph of the given declarations.
    ///
    /// # Errors
    ///
    /// Returns [`DddmapError::Classify`] if a field type contains a nested
    /// map. The whole build is aborted.
    pub fn build_graph<'a>(&self, entities: &'a [Entity]) -> Result<EntityGraph<'a>, DddmapError> {
        info!(entities = entities.len(); "Building entity graph");
        let graph = EntityGraph::from_entities(entities)?;
        debug!(relations = graph.relation_count(); "Entity graph built successfully");
        Ok(graph)
    }

    /// Render an entity graph to Graphviz DOT text.
    ///
    /// # Errors
    ///
    /// Returns [`DddmapError::Config`] if a configured color or layout
    /// direction is invalid.
    pub fn render_dot(&self, graph: &EntityGraph<'_>) -> Result<String, DddmapError> {
        let exporter = DotExporter::new(&self.config)?;
        let dot = exporter.export(graph);
        info!("DOT rendered successfully");
        Ok(dot)
    }
}
