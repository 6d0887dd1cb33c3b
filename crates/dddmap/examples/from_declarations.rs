//! Example: Rendering a domain model from type declarations
//!
//! This example declares a small ordering domain by hand, the way a source
//! front end would hand it over, and prints the resulting DOT graph.
//! Pipe the output to `dot -Tsvg` to draw it.

use dddmap::{
    DiagramBuilder, ImportSpec,
    model::{Entity, EntityKind, Field},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let entities = vec![
        Entity::new("example.com/shop/order", "Order")
            .with_kind(EntityKind::AggregateRoot)
            .with_import(ImportSpec::new("\"example.com/shop/customer\""))
            .with_import(ImportSpec::new("\"example.com/shop/money\""))
            .with_field(Field::parse("id", "string")?)
            .with_field(Field::parse("buyer", "*customer.Customer")?)
            .with_field(Field::parse("lines", "[]*Line")?)
            .with_field(Field::parse("total", "money.Amount")?),
        Entity::new("example.com/shop/order", "Line")
            .with_import(ImportSpec::new("\"example.com/shop/money\""))
            .with_field(Field::parse("sku", "string")?)
            .with_field(Field::parse("quantity", "int")?)
            .with_field(Field::parse("price", "money.Amount")?),
        Entity::new("example.com/shop/customer", "Customer")
            .with_field(Field::parse("addresses", "map[string]Address")?),
        Entity::new("example.com/shop/customer", "Address").with_kind(EntityKind::ValueObject),
        Entity::new("example.com/shop/money", "Amount").with_kind(EntityKind::ValueObject),
    ];

    let builder = DiagramBuilder::default();
    let graph = builder.build_graph(&entities)?;
    eprintln!(
        "{} entities, {} relations",
        graph.entity_count(),
        graph.relation_count()
    );

    println!("{}", builder.render_dot(&graph)?);
    Ok(())
}
