//! OpenAPI schema-map parsing for TypeScript model generation
//!
//! This crate reads an OpenAPI 3.0 document, extracts the
//! `components.schemas` map, and classifies each named schema into the
//! `SchemaDocument` intermediate representation.
//!
//! ## Parsing strategy
//!
//! Deserialization is strongly typed: the raw document shape lives in
//! `types`, and the `converter` performs a single classification pass that
//! resolves every optional-field probe up front. Anything outside the
//! recognized set of forms (`oneOf`, `allOf`, `$ref`, primitive/array/object
//! `type`) is rejected with an error naming the offending node path.

mod converter;
mod parser;
mod types;

pub use converter::{convert_node, convert_spec_to_document, REF_PREFIX};
pub use parser::SchemaParser;
pub use types::{Components, OpenApiSpec, RawSchema};
