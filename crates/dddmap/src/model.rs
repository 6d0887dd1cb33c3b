//! Declarations of domain types.
//!
//! An [`Entity`] is a type declaration already isolated by a source front
//! end: its package, its name, the imports of the file it lives in, and its
//! [`Field`]s with their declared types.

use std::fmt;

use dddmap_parser::{ImportSpec, TypeExpr, parse_type_expr};

use crate::DddmapError;

/// Role of a declared type in the domain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntityKind {
    /// The consistency boundary of an aggregate.
    AggregateRoot,
    /// A type with identity.
    #[default]
    Entity,
    /// An immutable type compared by value.
    ValueObject,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AggregateRoot => write!(f, "aggregate root"),
            Self::Entity => write!(f, "entity"),
            Self::ValueObject => write!(f, "value object"),
        }
    }
}

/// A named member of an [`Entity`] and its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    ty: TypeExpr,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Creates a field whose type is given in Go-style syntax.
    ///
    /// # Errors
    ///
    /// Returns [`DddmapError::Parse`] if `ty` is not a valid type expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use dddmap::model::Field;
    ///
    /// let field = Field::parse("items", "[]*Item").unwrap();
    /// assert_eq!(field.ty().to_string(), "[]*Item");
    /// ```
    pub fn parse(name: impl Into<String>, ty: &str) -> Result<Self, DddmapError> {
        let ty = parse_type_expr(ty).map_err(|err| DddmapError::new_parse_error(err, ty))?;
        Ok(Self::new(name, ty))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeExpr {
        &self.ty
    }
}

/// A declared domain type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    package: String,
    name: String,
    kind: EntityKind,
    imports: Vec<ImportSpec>,
    fields: Vec<Field>,
}

impl Entity {
    /// Creates an entity with no fields or imports.
    ///
    /// # Arguments
    ///
    /// * `package` - Full path of the package the type is declared in
    /// * `name` - The type name
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
            kind: EntityKind::default(),
            imports: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_import(mut self, import: ImportSpec) -> Self {
        self.imports.push(import);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Fully qualified identifier, `"{package}.{name}"`.
    pub fn id(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn imports(&self) -> &[ImportSpec] {
        &self.imports
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
