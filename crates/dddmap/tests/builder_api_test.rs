//! Integration tests for the DiagramBuilder API

use dddmap::{
    DddmapError, DiagramBuilder, ImportSpec, TypeExpr,
    config::AppConfig,
    model::{Entity, EntityKind, Field},
    relation::RelationshipKind,
};

fn shop() -> Vec<Entity> {
    vec![
        Entity::new("example.com/shop/order", "Order")
            .with_kind(EntityKind::AggregateRoot)
            .with_import(ImportSpec::new("\"example.com/shop/customer\""))
            .with_import(ImportSpec::new("\"example.com/shop/money\"").with_alias("m"))
            .with_field(Field::parse("id", "string").unwrap())
            .with_field(Field::parse("buyer", "*customer.Customer").unwrap())
            .with_field(Field::parse("lines", "[]*Line").unwrap())
            .with_field(Field::parse("total", "m.Amount").unwrap())
            .with_field(Field::parse("notes", "map[string]string").unwrap()),
        Entity::new("example.com/shop/order", "Line")
            .with_field(Field::parse("sku", "string").unwrap())
            .with_field(Field::parse("price", "money.Amount").unwrap()),
        Entity::new("example.com/shop/customer", "Customer"),
        Entity::new("example.com/shop/money", "Amount").with_kind(EntityKind::ValueObject),
    ]
}

#[test]
fn test_builder_api_exists() {
    let _builder = DiagramBuilder::default();
}

#[test]
fn test_build_graph_relations() {
    let entities = shop();
    let builder = DiagramBuilder::default();
    let graph = builder.build_graph(&entities).expect("Failed to build graph");

    let relations: Vec<_> = graph
        .relations()
        .map(|(source, target, edge)| (source.name(), target.name(), edge.field(), edge.kind()))
        .collect();

    // `Line.price` uses a qualifier with no matching import and is dropped.
    assert_eq!(
        relations,
        vec![
            ("Order", "Customer", "buyer", RelationshipKind::OneToOne),
            ("Order", "Line", "lines", RelationshipKind::OneToMany),
            ("Order", "Amount", "total", RelationshipKind::OneToOne),
        ]
    );
}

#[test]
fn test_render_dot() {
    let entities = shop();
    let builder = DiagramBuilder::default();
    let graph = builder.build_graph(&entities).expect("Failed to build graph");
    let dot = builder.render_dot(&graph).expect("Failed to render");

    assert!(dot.starts_with("digraph"), "Output should be a digraph");
    assert!(dot.contains("\"example.com/shop/order.Order\" [label=<"));
    assert!(dot.contains("arrowhead=crow, label=\"lines\""));
    assert!(dot.contains(">map[string]string</TD>"));
    assert_eq!(dot.matches(" -> ").count(), 3);
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::from_toml_str(
        r#"
        [table]
        blank_row_width = 3

        [graph]
        name = "shop"
        rankdir = "TB"
        "#,
    )
    .expect("Failed to parse config");

    let entities = shop();
    let builder = DiagramBuilder::new(config);
    let graph = builder.build_graph(&entities).expect("Failed to build graph");
    let dot = builder.render_dot(&graph).expect("Failed to render");

    assert!(dot.starts_with("digraph \"shop\" {"));
    assert!(dot.contains("rankdir=TB;"));
    assert!(dot.contains("COLSPAN=\"3\">Order</TD>"));
}

#[test]
fn test_nested_map_aborts_build() {
    let entities = vec![
        Entity::new("example.com/shop", "Catalog").with_field(Field::new(
            "index",
            TypeExpr::mapping(
                TypeExpr::ident("string"),
                TypeExpr::mapping(TypeExpr::ident("string"), TypeExpr::ident("Product")),
            ),
        )),
        Entity::new("example.com/shop", "Product"),
    ];

    let builder = DiagramBuilder::default();
    let result = builder.build_graph(&entities);
    assert!(matches!(result, Err(DddmapError::Classify { .. })));
}

#[test]
fn test_invalid_style_returns_error() {
    let config = AppConfig::from_toml_str("[style]\naggregate_root_color = \"not a color\"")
        .expect("Failed to parse config");

    let entities = shop();
    let builder = DiagramBuilder::new(config);
    let graph = builder.build_graph(&entities).expect("Failed to build graph");
    assert!(builder.render_dot(&graph).is_err());
}

#[test]
fn test_builder_reusability() {
    let first = shop();
    let second = vec![Entity::new("p", "Solo")];

    let builder = DiagramBuilder::default();
    let graph1 = builder.build_graph(&first).expect("Failed to build first graph");
    let graph2 = builder.build_graph(&second).expect("Failed to build second graph");

    assert_eq!(graph1.entity_count(), 4);
    assert_eq!(graph2.entity_count(), 1);
    assert!(builder.render_dot(&graph2).expect("Failed to render").contains("Solo"));
}
