//! Entity relation types.
//!
//! A [`Relation`] is one directional reference from a declared field to a
//! named type, annotated with its [`RelationshipKind`]. The qualifier/name
//! pair is kept separately in [`TypeRef`] so multiplicity can be decided
//! independently of which type is referenced.

use std::fmt;

/// Multiplicity of a relation between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelationshipKind {
    /// The field holds at most one instance of the target.
    #[default]
    OneToOne,
    /// The field holds an ordered collection of the target.
    OneToMany,
}

impl RelationshipKind {
    /// Returns `true` for [`RelationshipKind::OneToMany`].
    pub fn is_many(self) -> bool {
        matches!(self, Self::OneToMany)
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneToOne => write!(f, "one-to-one"),
            Self::OneToMany => write!(f, "one-to-many"),
        }
    }
}

/// A referenced type name, optionally qualified by a namespace alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    qualifier: Option<String>,
    name: String,
}

impl TypeRef {
    /// Creates an unqualified reference to a type in the current namespace.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    /// Creates a reference to a type imported under `qualifier`.
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attaches a multiplicity, producing a [`Relation`].
    pub fn with_kind(self, kind: RelationshipKind) -> Relation {
        Relation { target: self, kind }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{qualifier}.{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A relation extracted from a single type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relation {
    target: TypeRef,
    kind: RelationshipKind,
}

impl Relation {
    /// Creates a new relation.
    ///
    /// # Arguments
    ///
    /// * `qualifier` - Namespace alias the name was imported under, if any
    /// * `name` - The referenced type name
    /// * `kind` - Multiplicity of the reference
    pub fn new(qualifier: Option<&str>, name: impl Into<String>, kind: RelationshipKind) -> Self {
        let target = match qualifier {
            Some(qualifier) => TypeRef::qualified(qualifier, name),
            None => TypeRef::local(name),
        };
        Self { target, kind }
    }

    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.target.qualifier()
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_accessors() {
        let relation = Relation::new(Some("pkg"), "User", RelationshipKind::OneToMany);
        assert_eq!(relation.qualifier(), Some("pkg"));
        assert_eq!(relation.name(), "User");
        assert!(relation.kind().is_many());
    }

    #[test]
    fn test_type_ref_with_kind() {
        let relation = TypeRef::local("Order").with_kind(RelationshipKind::OneToOne);
        assert_eq!(relation, Relation::new(None, "Order", RelationshipKind::OneToOne));
    }

    #[test]
    fn test_type_ref_display() {
        assert_eq!(TypeRef::local("Order").to_string(), "Order");
        assert_eq!(TypeRef::qualified("sales", "Order").to_string(), "sales.Order");
    }
}
