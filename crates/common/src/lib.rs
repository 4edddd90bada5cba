//! Common types and utilities for the TypeScript model generator
//!
//! This crate contains the shared error type and the intermediate
//! representation of schema documents used across the parser, generator,
//! and CLI components.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during model generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Malformed reference {reference:?} at {path}: expected prefix #/components/schemas/")]
    MalformedReference { reference: String, path: String },

    #[error("Unsupported schema at {path}: {detail}")]
    UnsupportedSchema { path: String, detail: String },

    #[error("Malformed schema at {path}: {detail}")]
    MalformedSchema { path: String, detail: String },

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// A fully classified schema document: named schemas in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Schema name -> classified node, in the order they appear in the input
    pub schemas: IndexMap<String, SchemaNode>,
}

impl SchemaDocument {
    /// Number of named schemas in the document
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when the document contains no schemas
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// One classified JSON-Schema fragment
///
/// Classification happens once at the parse boundary; every inhabitant of
/// this type translates to a TypeScript type expression without further
/// shape checks. Unsupported shapes are rejected during classification and
/// never reach this representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaNode {
    /// `oneOf` composition: members joined with `|`
    Union(Vec<SchemaNode>),

    /// `allOf` composition: members joined with `&`
    Intersection(Vec<SchemaNode>),

    /// `$ref` to another named schema; holds the bare schema name with the
    /// `#/components/schemas/` prefix already stripped
    Reference(String),

    /// `type: number` or `type: integer` (no distinction is preserved)
    Number,

    /// `type: string`, with the enum-literal list when `enum` was present
    String {
        enum_values: Option<Vec<String>>,
    },

    /// `type: boolean`
    Boolean,

    /// `type: array` with its `items` schema
    Array(Box<SchemaNode>),

    /// `type: object` with its properties in document order
    Object(Vec<PropertyDefinition>),
}

/// One property of an object schema
///
/// The `required`-set membership check from the raw document is resolved
/// here, at conversion time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    /// Property name as written in the document
    pub name: String,

    /// Whether the property name appeared in the schema's `required` list
    pub required: bool,

    /// The property's own schema
    pub schema: SchemaNode,
}
