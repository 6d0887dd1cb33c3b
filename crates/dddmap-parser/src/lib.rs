//! Type expression analysis for dddmap.
//!
//! This crate turns declared field types into entity relations:
//!
//! - [`ast`]: The [`TypeExpr`] tree and [`ImportSpec`] records
//! - [`classify`](mod@classify): Maps a type expression to zero, one or two [`Relation`]s
//! - [`is_basic_type`]: Filters references to built-in value types
//! - [`unwrap_literal`] and [`resolve_path`]: Map an import alias to its full path
//! - [`parse_type_expr`]: Parses Go-style type syntax such as `map[string][]*pkg.User`, up to [`MAX_NESTING`] levels deep
//!
//! # Example
//!
//! ```
//! use dddmap_parser::{classify, parse_type_expr};
//! use dddmap_core::relation::RelationshipKind;
//!
//! let expr = parse_type_expr("[]*order.Item").unwrap();
//! let relations = classify(&expr).unwrap();
//!
//! assert_eq!(relations.len(), 1);
//! assert_eq!(relations[0].qualifier(), Some("order"));
//! assert_eq!(relations[0].name(), "Item");
//! assert_eq!(relations[0].kind(), RelationshipKind::OneToMany);
//! ```

pub mod ast;
pub mod classify;
pub mod error;

mod basic;
mod imports;
mod parser;

pub use ast::{ImportSpec, TypeExpr};
pub use basic::is_basic_type;
pub use classify::{BaseRelation, base_relation, classify, classify_all, multiplicity_for};
pub use error::{ClassificationError, MapPosition, ParseError};
pub use imports::{resolve_path, unwrap_literal};
pub use parser::{MAX_NESTING, parse_type_expr};

pub use dddmap_core::relation::Relation;
