//! Classification of type expressions into entity relations.
//!
//! Two independent questions are answered for every expression:
//!
//! - *Which* types does it reference? [`base_relation`] walks through
//!   pointers and sequences down to the referenced name, or to the key and
//!   value names of a map.
//! - *How many* of them? [`multiplicity_for`] looks only at the outer shape:
//!   a sequence is one-to-many, everything else is one-to-one, and pointers
//!   are transparent.
//!
//! [`classify`] composes both. A map always yields two one-to-one
//! relations, key first, even when wrapped in a sequence.

use log::trace;

use dddmap_core::relation::{Relation, RelationshipKind, TypeRef};

use crate::{
    ast::TypeExpr,
    error::{ClassificationError, MapPosition},
};

/// The referenced type names of an expression, without multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseRelation {
    /// A single referenced type.
    Single(TypeRef),
    /// The key and value types of a map.
    Pair { key: TypeRef, value: TypeRef },
}

/// What is left of an expression once pointers and sequences are peeled off.
enum Core<'a> {
    Named(TypeRef),
    Map { key: &'a TypeExpr, value: &'a TypeExpr },
}

fn peel(mut expr: &TypeExpr) -> Core<'_> {
    loop {
        match expr {
            TypeExpr::Identifier(name) => return Core::Named(TypeRef::local(name.as_str())),
            TypeExpr::Qualified { qualifier, name } => {
                return Core::Named(TypeRef::qualified(qualifier.as_str(), name.as_str()));
            }
            TypeExpr::Pointer(inner) | TypeExpr::Sequence(inner) => expr = inner.as_ref(),
            TypeExpr::Mapping { key, value } => {
                return Core::Map {
                    key: key.as_ref(),
                    value: value.as_ref(),
                };
            }
        }
    }
}

/// Resolves the referenced type names of `expr`.
///
/// Walks iteratively, so arbitrarily deep pointer and sequence chains are
/// fine.
///
/// # Errors
///
/// Returns [`ClassificationError::UnsupportedNesting`] if a map key or value
/// resolves to another map, directly or through pointers and sequences. The
/// position is that of the outermost offending slot.
pub fn base_relation(expr: &TypeExpr) -> Result<BaseRelation, ClassificationError> {
    match peel(expr) {
        Core::Named(target) => Ok(BaseRelation::Single(target)),
        Core::Map { key, value } => Ok(BaseRelation::Pair {
            key: map_slot(key, MapPosition::Key)?,
            value: map_slot(value, MapPosition::Value)?,
        }),
    }
}

fn map_slot(expr: &TypeExpr, position: MapPosition) -> Result<TypeRef, ClassificationError> {
    match peel(expr) {
        Core::Named(target) => Ok(target),
        Core::Map { .. } => Err(ClassificationError::UnsupportedNesting { position }),
    }
}

/// Multiplicity implied by the outer shape of `expr`.
///
/// Only applied when `expr` references a single type; map relations are
/// always one-to-one.
pub fn multiplicity_for(mut expr: &TypeExpr) -> RelationshipKind {
    while let TypeExpr::Pointer(inner) = expr {
        expr = inner.as_ref();
    }
    match expr {
        TypeExpr::Sequence(_) => RelationshipKind::OneToMany,
        TypeExpr::Identifier(_)
        | TypeExpr::Qualified { .. }
        | TypeExpr::Pointer(_)
        | TypeExpr::Mapping { .. } => RelationshipKind::OneToOne,
    }
}

/// Classifies a type expression into the relations it denotes.
///
/// # Errors
///
/// Returns [`ClassificationError::UnsupportedNesting`] for maps nested in a
/// map key or value. No relations are produced in that case.
///
/// # Examples
///
/// ```
/// use dddmap_parser::{TypeExpr, classify};
///
/// let expr = TypeExpr::mapping(TypeExpr::ident("OrderID"), TypeExpr::ident("Order"));
/// let relations = classify(&expr).unwrap();
///
/// assert_eq!(relations[0].name(), "OrderID");
/// assert_eq!(relations[1].name(), "Order");
/// ```
pub fn classify(expr: &TypeExpr) -> Result<Vec<Relation>, ClassificationError> {
    let relations = match base_relation(expr)? {
        BaseRelation::Single(target) => vec![target.with_kind(multiplicity_for(expr))],
        BaseRelation::Pair { key, value } => vec![
            key.with_kind(RelationshipKind::OneToOne),
            value.with_kind(RelationshipKind::OneToOne),
        ],
    };

    trace!(relations:?; "Classified type expression");
    Ok(relations)
}

/// Classifies every expression in order and concatenates the relations.
///
/// # Errors
///
/// Stops at the first expression that fails to classify and returns its
/// error; relations from earlier expressions are discarded.
pub fn classify_all(exprs: &[TypeExpr]) -> Result<Vec<Relation>, ClassificationError> {
    let mut relations = Vec::with_capacity(exprs.len());
    for expr in exprs {
        relations.extend(classify(expr)?);
    }
    Ok(relations)
}
