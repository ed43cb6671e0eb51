//! Schema model types.
//!
//! The model is the structured representation handed over by an
//! external schema parser: entities (types and remote-callable
//! functions) with ordered, typed, documented fields. The weaving
//! engine treats it as read-only input; nothing here is mutated after
//! deserialization.
//!
//! Field types stay in their schema spelling (`int53`, `string`,
//! `vector<message>`, ...). Mapping them to target-language type names
//! is the job of a [`DocTarget`](crate::target::DocTarget)
//! implementation.

use serde::{Deserialize, Serialize};

/// A full schema: the ordered list of documented entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaModel {
    /// Entities in schema declaration order.
    pub entities: Vec<Entity>,
}

/// A named schema declaration: a type or a remote-callable function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Qualified schema name (dot-separated namespace segments).
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Whether this entity is a type or a function.
    pub kind: EntityKind,

    /// Schema name of the abstract base type this concrete type
    /// belongs to, if any. Absent for functions and for types that
    /// extend the implicit base class directly.
    #[serde(default)]
    pub base: Option<String>,

    /// Fields in schema declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Distinguishes schema types from remote-callable functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A data type. Abstract types have no fields of their own and
    /// act as base classes for their variants.
    Type {
        #[serde(default)]
        is_abstract: bool,
    },

    /// A remote-callable function. Carries the schema name of the
    /// type it returns.
    Function { return_type: String },
}

/// A single field of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Raw schema name: snake_case, optionally `param_`-prefixed to
    /// mark it as a function parameter.
    pub name: String,

    /// Schema type text (primitive, entity reference, or
    /// `vector<T>`, recursively).
    #[serde(rename = "type")]
    pub ty: String,

    /// Human-readable description.
    pub description: String,

    /// Whether the field's value may be absent or empty.
    #[serde(default)]
    pub nullable: bool,
}

impl Entity {
    /// Whether this entity is a function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, EntityKind::Function { .. })
    }

    /// Whether this entity is an abstract type.
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, EntityKind::Type { is_abstract: true })
    }

    /// Schema name of the returned type, for functions.
    pub fn return_type(&self) -> Option<&str> {
        match &self.kind {
            EntityKind::Function { return_type } => Some(return_type),
            EntityKind::Type { .. } => None,
        }
    }
}
