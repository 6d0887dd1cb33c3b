//! Table cell model for diagram nodes.
//!
//! Entity nodes are drawn as HTML-like tables: each node is a list of
//! [`Row`]s, each row a list of [`Cell`]s. Cells carry an anchor that a
//! renderer turns into a named connection point (a Graphviz `PORT`), so
//! edges can attach to a specific field rather than to the node as a whole.
//!
//! # Overview
//!
//! - [`TableBuilder`]: Builds cells and rows according to a [`TableConfig`].
//! - [`column`], [`blank_column`], [`name_row`], [`blank_row`]: The same
//!   operations using the default configuration.
//! - [`sanitize_anchor`]: Maps a free-form identifier to a renderer-safe anchor.
//!
//! # Example
//!
//! ```
//! use dddmap_core::table::{self, TableBuilder, TableConfig};
//!
//! let cell = table::column("User", "pkg.User", "black");
//! assert_eq!(cell.anchor(), "pkg_User");
//!
//! let builder = TableBuilder::new(TableConfig::new(4, "lightgray"));
//! assert_eq!(builder.blank_row().cells().len(), 4);
//! ```

use log::debug;
use serde::Deserialize;

/// Number of blank cells in a padding row when no configuration is given.
pub const BLANK_ROW_WIDTH: usize = 2;

/// Background color of filler cells.
pub const BLANK_COLOR: &str = "white";

/// A single rendering unit of a table-based diagram node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    anchor: String,
    color: String,
    row_span: usize,
    col_span: usize,
}

impl Cell {
    fn new(text: String, anchor: String, color: String, col_span: usize) -> Self {
        Self {
            text,
            anchor,
            color,
            row_span: 1,
            col_span: col_span.max(1),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The renderer-safe connection point name; empty for filler cells.
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn row_span(&self) -> usize {
        self.row_span
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    /// Returns `true` if the cell has no text and no anchor.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.anchor.is_empty()
    }
}

/// An ordered sequence of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Total number of grid columns this row occupies.
    pub fn width(&self) -> usize {
        self.cells.iter().map(Cell::col_span).sum()
    }

    /// Appends a cell to the end of the row.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Configuration for the [`TableBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of blank cells in a padding row.
    blank_row_width: usize,

    /// Background color of the name row.
    name_color: String,
}

impl TableConfig {
    /// Creates a new [`TableConfig`].
    ///
    /// # Arguments
    ///
    /// * `blank_row_width` - Number of cells in a padding row; `0` is raised to `1`.
    /// * `name_color` - Background color of the name row.
    pub fn new(blank_row_width: usize, name_color: impl Into<String>) -> Self {
        Self {
            blank_row_width,
            name_color: name_color.into(),
        }
    }

    /// Number of cells in a padding row, never less than one.
    pub fn blank_row_width(&self) -> usize {
        self.blank_row_width.max(1)
    }

    pub fn name_color(&self) -> &str {
        &self.name_color
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(BLANK_ROW_WIDTH, BLANK_COLOR)
    }
}

/// Builds table cells and rows.
///
/// The builder holds only its configuration; every call returns freshly
/// allocated values.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    config: TableConfig,
}

impl TableBuilder {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Builds a single-span cell whose anchor is derived from `identifier`.
    ///
    /// # Arguments
    ///
    /// * `name` - Displayed text
    /// * `identifier` - Free-form identifier, sanitized into the anchor
    /// * `color` - Background color
    pub fn column(&self, name: &str, identifier: &str, color: &str) -> Cell {
        Cell::new(
            name.to_string(),
            sanitize_anchor(identifier),
            color.to_string(),
            1,
        )
    }

    /// Builds the canonical filler cell.
    pub fn blank_column(&self) -> Cell {
        Cell::new(String::new(), String::new(), BLANK_COLOR.to_string(), 1)
    }

    /// Builds a header row holding one cell that spans `span` columns.
    ///
    /// The cell is anchored on the sanitized name so edges can target the
    /// header. A `span` of zero is raised to one.
    pub fn name_row(&self, name: &str, span: usize) -> Row {
        if span == 0 {
            debug!(name; "Name row span of 0 raised to 1");
        }
        Row::new(vec![Cell::new(
            name.to_string(),
            sanitize_anchor(name),
            self.config.name_color.clone(),
            span,
        )])
    }

    /// Builds a padding row of [`TableConfig::blank_row_width`] blank cells.
    pub fn blank_row(&self) -> Row {
        (0..self.config.blank_row_width())
            .map(|_| self.blank_column())
            .collect()
    }
}

/// Replaces every `.` and `-` in `identifier` with `_`.
///
/// All other characters, including `:` and existing underscores, are kept
/// verbatim, so a `host:port` suffix survives unchanged.
///
/// # Examples
///
/// ```
/// use dddmap_core::table::sanitize_anchor;
///
/// assert_eq!(sanitize_anchor("192.168.0.1:8080"), "192_168_0_1:8080");
/// assert_eq!(sanitize_anchor("10.0.0.1-8080"), "10_0_0_1_8080");
/// ```
pub fn sanitize_anchor(identifier: &str) -> String {
    identifier.replace(['.', '-'], "_")
}

/// Builds a cell with the default [`TableBuilder`]. See [`TableBuilder::column`].
pub fn column(name: &str, identifier: &str, color: &str) -> Cell {
    TableBuilder::default().column(name, identifier, color)
}

/// Builds the canonical filler cell. See [`TableBuilder::blank_column`].
pub fn blank_column() -> Cell {
    TableBuilder::default().blank_column()
}

/// Builds a header row with the default [`TableBuilder`]. See [`TableBuilder::name_row`].
pub fn name_row(name: &str, span: usize) -> Row {
    TableBuilder::default().name_row(name, span)
}

/// Builds a padding row of [`BLANK_ROW_WIDTH`] blank cells.
pub fn blank_row() -> Row {
    TableBuilder::default().blank_row()
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Property Test Functions
    // ===================

    /// Sanitized anchors never contain `.` or `-` and keep the input length.
    fn check_sanitize_removes_separators(input: &str) -> Result<(), TestCaseError> {
        let anchor = sanitize_anchor(input);

        prop_assert!(!anchor.contains('.'), "`{anchor}` still contains '.'");
        prop_assert!(!anchor.contains('-'), "`{anchor}` still contains '-'");
        prop_assert_eq!(anchor.chars().count(), input.chars().count());
        Ok(())
    }

    /// Every character other than `.` and `-` is left in place.
    fn check_sanitize_keeps_other_chars(input: &str) -> Result<(), TestCaseError> {
        let anchor = sanitize_anchor(input);

        for (original, sanitized) in input.chars().zip(anchor.chars()) {
            if original == '.' || original == '-' {
                prop_assert_eq!(sanitized, '_');
            } else {
                prop_assert_eq!(sanitized, original);
            }
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn sanitize_removes_separators(input in "[a-zA-Z0-9._:-]{0,32}") {
            check_sanitize_removes_separators(&input)?;
        }

        #[test]
        fn sanitize_keeps_other_chars(input in "\\PC{0,32}") {
            check_sanitize_keeps_other_chars(&input)?;
        }
    }
}
