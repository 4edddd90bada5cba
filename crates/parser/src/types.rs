//! OpenAPI document type definitions
//!
//! Simplified representation focusing on the `components.schemas` map

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., "3.0.0")
    #[serde(default)]
    pub openapi: Option<String>,

    /// Reusable components
    #[serde(default)]
    pub components: Option<Components>,
}

/// Reusable components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    /// Schemas, in document order
    #[serde(default)]
    pub schemas: IndexMap<String, RawSchema>,
}

/// One schema fragment as written in the document
///
/// All fields are optional; the converter decides which recognized form
/// the fragment takes. Keywords outside this set are dropped during
/// deserialization and contribute nothing to the generated type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchema {
    /// Union composition
    #[serde(rename = "oneOf")]
    #[serde(default)]
    pub one_of: Option<Vec<RawSchema>>,

    /// Intersection composition
    #[serde(rename = "allOf")]
    #[serde(default)]
    pub all_of: Option<Vec<RawSchema>>,

    /// Reference to another schema, e.g. "#/components/schemas/Artist"
    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    /// Type: string, number, integer, boolean, array, object
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<String>,

    /// Enum values (only meaningful for string schemas)
    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Option<Vec<String>>,

    /// Items schema (for array type)
    #[serde(default)]
    pub items: Option<Box<RawSchema>>,

    /// Properties (for object type), in document order
    #[serde(default)]
    pub properties: Option<IndexMap<String, RawSchema>>,

    /// Required property names
    #[serde(default)]
    pub required: Vec<String>,
}

impl OpenApiSpec {
    /// Iterate the named schemas of the document, in document order
    pub fn schemas(&self) -> impl Iterator<Item = (&String, &RawSchema)> {
        self.components
            .iter()
            .flat_map(|c| c.schemas.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ref_schema() {
        let raw: RawSchema =
            serde_json::from_str(r##"{"$ref": "#/components/schemas/Artist"}"##).unwrap();
        assert_eq!(raw.ref_path.as_deref(), Some("#/components/schemas/Artist"));
        assert!(raw.schema_type.is_none());
    }

    #[test]
    fn test_unknown_keywords_are_ignored() {
        let raw: RawSchema = serde_json::from_str(
            r#"{"type": "string", "format": "date-time", "nullable": true}"#,
        )
        .unwrap();
        assert_eq!(raw.schema_type.as_deref(), Some("string"));
        assert!(raw.enum_values.is_none());
    }

    #[test]
    fn test_properties_keep_document_order() {
        let raw: RawSchema = serde_json::from_str(
            r#"{"type": "object", "properties": {"z": {"type": "string"}, "a": {"type": "number"}}}"#,
        )
        .unwrap();
        let keys: Vec<&String> = raw.properties.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
