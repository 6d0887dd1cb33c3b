//! Graphviz DOT rendering of entity graphs.
//!
//! Every entity becomes a `plaintext` node labelled with an HTML-like table:
//!
//! ```text
//! +-----------------------+
//! |         Order         |   name row, spans the table width
//! +-----------+-----------+
//! |           |           |   blank row
//! +-----------+-----------+
//! | lines     | []Line    |   one row per field
//! +-----------+-----------+
//! ```
//!
//! Field-name cells carry a `PORT`, so relation edges leave from the field
//! that holds the reference and arrive at the target's name row.

use std::fmt::Write as _;

use log::{debug, trace};

use dddmap_core::{
    color::Color,
    table::{Cell, Row, TableBuilder, sanitize_anchor},
};

use crate::{
    DddmapError,
    config::{AppConfig, GraphConfig},
    model::{Entity, EntityKind, Field},
    structure::{EntityGraph, RelationEdge},
};

/// Number of cells in a field row: field name and field type.
const FIELD_COLUMNS: usize = 2;

/// Colors resolved from [`StyleConfig`](crate::config::StyleConfig).
#[derive(Debug, Clone)]
struct Palette {
    aggregate_root: Color,
    entity: Color,
    value_object: Color,
    field: Color,
}

impl Palette {
    fn kind(&self, kind: EntityKind) -> &Color {
        match kind {
            EntityKind::AggregateRoot => &self.aggregate_root,
            EntityKind::Entity => &self.entity,
            EntityKind::ValueObject => &self.value_object,
        }
    }
}

/// Renders an [`EntityGraph`] as Graphviz DOT text.
#[derive(Debug, Clone)]
pub struct DotExporter {
    tables: TableBuilder,
    palette: Palette,
    graph: GraphConfig,
}

impl DotExporter {
    /// Creates an exporter, validating the configured colors and direction.
    ///
    /// # Errors
    ///
    /// Returns [`DddmapError::Config`] for an invalid color or `rankdir`.
    pub fn new(config: &AppConfig) -> Result<Self, DddmapError> {
        let style = config.style();
        let palette = Palette {
            aggregate_root: style
                .kind_color(EntityKind::AggregateRoot)
                .map_err(DddmapError::Config)?,
            entity: style
                .kind_color(EntityKind::Entity)
                .map_err(DddmapError::Config)?,
            value_object: style
                .kind_color(EntityKind::ValueObject)
                .map_err(DddmapError::Config)?,
            field: style.field_color().map_err(DddmapError::Config)?,
        };
        config.graph().validate().map_err(DddmapError::Config)?;

        Ok(Self {
            tables: TableBuilder::new(config.table().clone()),
            palette,
            graph: config.graph().clone(),
        })
    }

    /// Number of grid columns of every entity table.
    fn table_width(&self) -> usize {
        self.tables.config().blank_row_width().max(FIELD_COLUMNS)
    }

    /// Builds the table rows of one entity.
    pub fn entity_rows(&self, entity: &Entity) -> Vec<Row> {
        let width = self.table_width();
        let mut rows = Vec::with_capacity(entity.fields().len() + 2);

        rows.push(self.tables.name_row(entity.name(), width));
        rows.push(self.tables.blank_row());

        for field in entity.fields() {
            let mut row = Row::new(vec![
                self.tables.column(
                    field.name(),
                    &field_identifier(entity, field.name()),
                    self.palette.kind(entity.kind()).as_str(),
                ),
                self.tables.column(
                    &field.ty().to_string(),
                    &type_identifier(entity, field),
                    self.palette.field.as_str(),
                ),
            ]);
            for _ in FIELD_COLUMNS..width {
                row.push(self.tables.blank_column());
            }
            rows.push(row);
        }

        trace!(entity = entity.id(), rows = rows.len(); "Built entity table");
        rows
    }

    /// Renders the whole graph.
    pub fn export(&self, graph: &EntityGraph<'_>) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "digraph \"{}\" {{", escape_id(self.graph.name()));
        let _ = writeln!(out, "  rankdir={};", self.graph.rankdir());
        let _ = writeln!(out, "  node [shape=plaintext];");

        for entity in graph.entities() {
            self.write_node(&mut out, entity);
        }
        for (source, target, edge) in graph.relations() {
            write_edge(&mut out, source, target, edge);
        }

        out.push_str("}\n");
        debug!(
            entities = graph.entity_count(),
            relations = graph.relation_count();
            "Rendered DOT graph"
        );
        out
    }

    fn write_node(&self, out: &mut String, entity: &Entity) {
        let _ = writeln!(out, "  \"{}\" [label=<", escape_id(&entity.id()));
        out.push_str("<TABLE BORDER=\"0\" CELLBORDER=\"1\" CELLSPACING=\"0\">\n");
        for row in self.entity_rows(entity) {
            out.push_str("<TR>");
            row.cells().iter().for_each(|cell| write_cell(out, cell));
            out.push_str("</TR>\n");
        }
        out.push_str("</TABLE>>];\n");
    }
}

fn write_cell(out: &mut String, cell: &Cell) {
    out.push_str("<TD");
    if !cell.anchor().is_empty() {
        let _ = write!(out, " PORT=\"{}\"", escape_html(cell.anchor()));
    }
    let _ = write!(out, " BGCOLOR=\"{}\"", escape_html(cell.color()));
    if cell.row_span() > 1 {
        let _ = write!(out, " ROWSPAN=\"{}\"", cell.row_span());
    }
    if cell.col_span() > 1 {
        let _ = write!(out, " COLSPAN=\"{}\"", cell.col_span());
    }
    let _ = write!(out, ">{}</TD>", escape_html(cell.text()));
}

fn write_edge(out: &mut String, source: &Entity, target: &Entity, edge: &RelationEdge) {
    let arrowhead = if edge.kind().is_many() { "crow" } else { "normal" };
    let _ = writeln!(
        out,
        "  \"{}\":\"{}\" -> \"{}\":\"{}\" [arrowhead={arrowhead}, label=\"{}\"];",
        escape_id(&source.id()),
        escape_id(&sanitize_anchor(&field_identifier(source, edge.field()))),
        escape_id(&target.id()),
        escape_id(&sanitize_anchor(target.name())),
        escape_id(edge.field()),
    );
}

/// Identifier of a field-name cell, before sanitization.
fn field_identifier(entity: &Entity, field: &str) -> String {
    format!("{}.{field}", entity.id())
}

/// Identifier of a field-type cell, before sanitization.
fn type_identifier(entity: &Entity, field: &Field) -> String {
    format!("{}.{}.type", entity.id(), field.name())
}

/// Escapes a string for use inside a quoted DOT identifier.
fn escape_id(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes a string for use inside an HTML-like label.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    use dddmap_core::table::TableConfig;
    use dddmap_parser::TypeExpr;

    use crate::config::StyleConfig;

    fn order() -> Entity {
        Entity::new("sales", "Order")
            .with_kind(EntityKind::AggregateRoot)
            .with_field(Field::new("id", TypeExpr::ident("string")))
            .with_field(Field::new("lines", TypeExpr::sequence(TypeExpr::ident("Line"))))
    }

    #[test]
    fn test_entity_rows() {
        let exporter = DotExporter::new(&AppConfig::default()).unwrap();
        let rows = exporter.entity_rows(&order());

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].cells()[0].text(), "Order");
        assert_eq!(rows[0].cells()[0].col_span(), 2);
        assert!(rows[1].cells().iter().all(Cell::is_blank));

        let lines = rows[3].cells();
        assert_eq!(lines[0].text(), "lines");
        assert_eq!(lines[0].anchor(), "sales_Order_lines");
        assert_eq!(lines[0].color(), "gold");
        assert_eq!(lines[1].text(), "[]Line");
        assert_eq!(lines[1].anchor(), "sales_Order_lines_type");
        assert_eq!(lines[1].color(), "white");
    }

    #[test]
    fn test_entity_rows_pad_to_width() {
        let config = AppConfig::new(
            TableConfig::new(4, "white"),
            StyleConfig::default(),
            GraphConfig::default(),
        );
        let exporter = DotExporter::new(&config).unwrap();
        let rows = exporter.entity_rows(&order());

        assert_eq!(rows[0].width(), 4);
        assert_eq!(rows[1].cells().len(), 4);
        assert_eq!(rows[2].cells().len(), 4);
        assert!(rows[2].cells()[2].is_blank());
    }

    #[test]
    fn test_export_node_and_edge() {
        let entities = vec![order(), Entity::new("sales", "Line")];
        let graph = EntityGraph::from_entities(&entities).unwrap();
        let dot = DotExporter::new(&AppConfig::default()).unwrap().export(&graph);

        assert!(dot.starts_with("digraph \"dddmap\" {\n"));
        assert!(dot.contains("rankdir=LR;"));
        assert!(dot.contains("\"sales.Order\" [label=<"));
        assert!(dot.contains("<TD PORT=\"Order\" BGCOLOR=\"white\" COLSPAN=\"2\">Order</TD>"));
        assert!(dot.contains(
            "\"sales.Order\":\"sales_Order_lines\" -> \"sales.Line\":\"Line\" [arrowhead=crow, label=\"lines\"];"
        ));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_export_escapes_html() {
        let entity = Entity::new("p", "Generic")
            .with_field(Field::new("a<b>", TypeExpr::ident("interface{}")));
        let entities = vec![entity];
        let graph = EntityGraph::from_entities(&entities).unwrap();
        let dot = DotExporter::new(&AppConfig::default()).unwrap().export(&graph);

        assert!(dot.contains(">a&lt;b&gt;</TD>"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AppConfig::from_toml_str("[style]\nentity_color = \"nope\"").unwrap();
        assert!(matches!(DotExporter::new(&config), Err(DddmapError::Config(_))));

        let config = AppConfig::from_toml_str("[graph]\nrankdir = \"UP\"").unwrap();
        assert!(matches!(DotExporter::new(&config), Err(DddmapError::Config(_))));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\""), "a &amp; &quot;b&quot;");
    }
}
