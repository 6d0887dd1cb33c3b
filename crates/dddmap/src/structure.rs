//! Entity graph assembly.
//!
//! [`EntityGraph`] turns a list of [`Entity`] declarations into a directed
//! graph: one node per entity, one edge per field reference to another
//! known entity.
//!
//! For every field the declared type is classified into relations. Each
//! relation is then resolved to a target entity id:
//! - unqualified references to basic types are dropped;
//! - unqualified references resolve in the declaring entity's package;
//! - qualified references resolve through the declaring file's imports.
//!
//! References whose target is not part of the input are dropped as well,
//! so the graph only contains edges between declared entities.

use indexmap::IndexMap;
use log::{debug, trace, warn};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use dddmap_core::relation::{Relation, RelationshipKind};
use dddmap_parser::{classify, is_basic_type, resolve_path};

use crate::{DddmapError, model::Entity};

/// A resolved reference from a field of one entity to another entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEdge {
    field: String,
    kind: RelationshipKind,
}

impl RelationEdge {
    /// Name of the field holding the reference.
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }
}

/// Directed graph of entities and the relations between them.
///
/// Entities keep their declaration order; edges keep discovery order.
#[derive(Debug)]
pub struct EntityGraph<'a> {
    graph: DiGraph<&'a Entity, RelationEdge>,
    index: IndexMap<String, NodeIndex>,
}

impl<'a> EntityGraph<'a> {
    /// Builds the graph from entity declarations.
    ///
    /// When two entities share an id the later declaration replaces the
    /// earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`DddmapError::Classify`] for the first field whose type
    /// cannot be classified; no partial graph is returned.
    pub fn from_entities(entities: &'a [Entity]) -> Result<Self, DddmapError> {
        let mut graph = DiGraph::new();
        let mut index: IndexMap<String, NodeIndex> = IndexMap::new();

        for entity in entities {
            let id = entity.id();
            match index.get(&id) {
                Some(&node) => {
                    warn!(entity = id; "Duplicate entity declaration replaces the earlier one");
                    graph[node] = entity;
                }
                None => {
                    let node = graph.add_node(entity);
                    index.insert(id, node);
                }
            }
        }

        let mut edges = Vec::new();
        for &source in index.values() {
            let entity: &Entity = graph[source];
            for field in entity.fields() {
                let relations = classify(field.ty()).map_err(|err| DddmapError::Classify {
                    entity: entity.id(),
                    field: field.name().to_string(),
                    err,
                })?;

                for relation in relations {
                    let Some(target_id) = resolve_target(entity, &relation) else {
                        continue;
                    };
                    match index.get(&target_id) {
                        Some(&target) => edges.push((
                            source,
                            target,
                            RelationEdge {
                                field: field.name().to_string(),
                                kind: relation.kind(),
                            },
                        )),
                        None => {
                            debug!(
                                entity = entity.id(),
                                field = field.name(),
                                target = target_id;
                                "Relation target is not a declared entity"
                            );
                        }
                    }
                }
            }
        }

        for (source, target, edge) in edges {
            graph.add_edge(source, target, edge);
        }

        debug!(
            entities = graph.node_count(),
            relations = graph.edge_count();
            "Entity graph built"
        );
        Ok(Self { graph, index })
    }

    /// Returns the entities in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = &'a Entity> + '_ {
        self.index.values().map(|&node| self.graph[node])
    }

    /// Returns the entity with the given id, if it exists.
    pub fn entity(&self, id: &str) -> Option<&'a Entity> {
        self.index.get(id).map(|&node| self.graph[node])
    }

    /// Returns every relation as `(source, target, edge)` in discovery order.
    pub fn relations(&self) -> impl Iterator<Item = (&'a Entity, &'a Entity, &RelationEdge)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()],
                self.graph[edge.target()],
                edge.weight(),
            )
        })
    }

    /// Returns the relations leaving the entity with the given id.
    pub fn relations_from<'s>(
        &'s self,
        id: &str,
    ) -> impl Iterator<Item = (&'a Entity, &'s RelationEdge)> + 's {
        let source = self.index.get(id).copied();
        self.graph
            .edge_references()
            .filter(move |edge| Some(edge.source()) == source)
            .map(|edge| (self.graph[edge.target()], edge.weight()))
    }

    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Resolves the id of the entity a relation points to.
///
/// Returns `None` for basic types and for qualifiers that match no import.
fn resolve_target(entity: &Entity, relation: &Relation) -> Option<String> {
    match relation.qualifier() {
        None if is_basic_type(relation.name()) => {
            trace!(entity = entity.id(), target = relation.name(); "Skipping basic type");
            None
        }
        None => Some(format!("{}.{}", entity.package(), relation.name())),
        Some(qualifier) => {
            let path = resolve_path(entity.imports(), qualifier);
            if path.is_empty() {
                debug!(
                    entity = entity.id(),
                    qualifier;
                    "Qualifier matches no import"
                );
                return None;
            }
            Some(format!("{path}.{}", relation.name()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dddmap_parser::{ImportSpec, TypeExpr};

    use crate::model::Field;

    fn sales_model() -> Vec<Entity> {
        vec![
            Entity::new("example.com/sales", "Order")
                .with_import(ImportSpec::new("\"example.com/customer\""))
                .with_field(Field::new("id", TypeExpr::ident("string")))
                .with_field(Field::new("buyer", TypeExpr::pointer(TypeExpr::qualified("customer", "Customer"))))
                .with_field(Field::new("lines", TypeExpr::sequence(TypeExpr::ident("Line")))),
            Entity::new("example.com/sales", "Line")
                .with_field(Field::new("qty", TypeExpr::ident("int"))),
            Entity::new("example.com/customer", "Customer"),
        ]
    }

    #[test]
    fn test_build_graph() {
        let entities = sales_model();
        let graph = EntityGraph::from_entities(&entities).unwrap();

        assert_eq!(graph.entity_count(), 3);
        assert_eq!(graph.relation_count(), 2);

        let relations: Vec<_> = graph
            .relations()
            .map(|(source, target, edge)| (source.name(), target.name(), edge.field(), edge.kind()))
            .collect();
        assert_eq!(
            relations,
            vec![
                ("Order", "Customer", "buyer", RelationshipKind::OneToOne),
                ("Order", "Line", "lines", RelationshipKind::OneToMany),
            ]
        );
    }

    #[test]
    fn test_entities_keep_declaration_order() {
        let entities = sales_model();
        let graph = EntityGraph::from_entities(&entities).unwrap();

        let names: Vec<_> = graph.entities().map(Entity::name).collect();
        assert_eq!(names, vec!["Order", "Line", "Customer"]);
        assert!(graph.entity("example.com/sales.Line").is_some());
        assert!(graph.entity("example.com/sales.Missing").is_none());
    }

    #[test]
    fn test_relations_from() {
        let entities = sales_model();
        let graph = EntityGraph::from_entities(&entities).unwrap();

        let targets: Vec<_> = graph
            .relations_from("example.com/sales.Order")
            .map(|(target, _)| target.name())
            .collect();
        assert_eq!(targets, vec!["Customer", "Line"]);
        assert_eq!(graph.relations_from("example.com/sales.Line").count(), 0);
        assert_eq!(graph.relations_from("unknown").count(), 0);
    }

    #[test]
    fn test_map_field_yields_two_relations() {
        let entities = vec![
            Entity::new("inv", "Stock").with_field(Field::new(
                "levels",
                TypeExpr::mapping(TypeExpr::ident("Sku"), TypeExpr::ident("Level")),
            )),
            Entity::new("inv", "Sku"),
            Entity::new("inv", "Level"),
        ];
        let graph = EntityGraph::from_entities(&entities).unwrap();

        let targets: Vec<_> = graph
            .relations_from("inv.Stock")
            .map(|(target, edge)| (target.name(), edge.kind()))
            .collect();
        assert_eq!(
            targets,
            vec![
                ("Sku", RelationshipKind::OneToOne),
                ("Level", RelationshipKind::OneToOne)
            ]
        );
    }

    #[test]
    fn test_unresolved_qualifier_is_skipped() {
        let entities = vec![
            Entity::new("sales", "Order")
                .with_field(Field::new("buyer", TypeExpr::qualified("customer", "Customer"))),
            Entity::new("customer", "Customer"),
        ];
        let graph = EntityGraph::from_entities(&entities).unwrap();
        assert_eq!(graph.relation_count(), 0);
    }

    #[test]
    fn test_aliased_import() {
        let entities = vec![
            Entity::new("sales", "Order")
                .with_import(ImportSpec::new("\"example.com/customer\"").with_alias("cust"))
                .with_field(Field::new("buyer", TypeExpr::qualified("cust", "Customer"))),
            Entity::new("example.com/customer", "Customer"),
        ];
        let graph = EntityGraph::from_entities(&entities).unwrap();
        assert_eq!(graph.relation_count(), 1);
    }

    #[test]
    fn test_duplicate_entity_replaced() {
        let entities = vec![
            Entity::new("sales", "Order").with_field(Field::new("a", TypeExpr::ident("Line"))),
            Entity::new("sales", "Line"),
            Entity::new("sales", "Order"),
        ];
        let graph = EntityGraph::from_entities(&entities).unwrap();

        assert_eq!(graph.entity_count(), 2);
        assert_eq!(graph.relation_count(), 0);
    }

    #[test]
    fn test_nested_map_fails() {
        let entities = vec![Entity::new("sales", "Order").with_field(Field::new(
            "index",
            TypeExpr::mapping(
                TypeExpr::ident("string"),
                TypeExpr::mapping(TypeExpr::ident("string"), TypeExpr::ident("Line")),
            ),
        ))];

        let err = EntityGraph::from_entities(&entities).unwrap_err();
        match err {
            DddmapError::Classify { entity, field, .. } => {
                assert_eq!(entity, "sales.Order");
                assert_eq!(field, "index");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
