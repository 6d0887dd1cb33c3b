//! Type expression tree and import declarations.
//!
//! [`TypeExpr`] covers the declared type shapes that can carry an entity
//! reference. It prints in Go-style syntax, the same syntax accepted by
//! [`parse_type_expr`](crate::parse_type_expr).

use std::fmt;

/// A declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A bare name, e.g. a type defined in the same namespace.
    Identifier(String),

    /// A name imported from another namespace.
    Qualified { qualifier: String, name: String },

    /// Single-level indirection.
    Pointer(Box<TypeExpr>),

    /// An ordered collection (array or slice).
    Sequence(Box<TypeExpr>),

    /// An associative collection.
    Mapping { key: Box<TypeExpr>, value: Box<TypeExpr> },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            qualifier: qualifier.into(),
            name: name.into(),
        }
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn sequence(element: TypeExpr) -> Self {
        Self::Sequence(Box::new(element))
    }

    pub fn mapping(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Moves the boxed children out, leaving empty names in their place.
    fn take_children(&mut self, pending: &mut Vec<TypeExpr>) {
        match self {
            Self::Identifier(_) | Self::Qualified { .. } => {}
            Self::Pointer(inner) | Self::Sequence(inner) => {
                pending.push(std::mem::replace(inner.as_mut(), Self::Identifier(String::new())));
            }
            Self::Mapping { key, value } => {
                pending.push(std::mem::replace(key.as_mut(), Self::Identifier(String::new())));
                pending.push(std::mem::replace(value.as_mut(), Self::Identifier(String::new())));
            }
        }
    }
}

// Deep pointer chains would otherwise be dropped recursively.
impl Drop for TypeExpr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Qualified { qualifier, name } => write!(f, "{qualifier}.{name}"),
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Sequence(element) => write!(f, "[]{element}"),
            Self::Mapping { key, value } => write!(f, "map[{key}]{value}"),
        }
    }
}

/// An import declaration of the file a type was declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// The path as a quoted literal, e.g. `"\"example.com/sales\""`.
    path: String,
    alias: Option<String>,
}

impl ImportSpec {
    /// Creates an import of `path`, given as it appears in source (quoted).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    /// Sets the local alias the import is bound to.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The raw path literal, quotes included.
    pub fn path_literal(&self) -> &str {
        &self.path
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}
