//! OpenAPI spec file parser

use super::types::OpenApiSpec;
use std::fs;
use std::path::Path;
use ts_model_generator_common::{GeneratorError, Result, SchemaDocument};

/// OpenAPI specification parser
///
/// Reads the `components.schemas` map of an OpenAPI 3.0 document and
/// classifies every named schema into the SchemaDocument IR.
pub struct SchemaParser {
    /// Loaded OpenAPI spec
    spec: OpenApiSpec,
}

impl SchemaParser {
    /// Load an OpenAPI spec from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SchemaParser::from_file("openapi.json")?;
    /// let document = parser.parse()?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read OpenAPI file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse an OpenAPI spec from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: OpenApiSpec = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse OpenAPI JSON: {}", e)))?;

        Ok(Self { spec })
    }

    /// Classify the spec's schemas into a SchemaDocument
    pub fn parse(&self) -> Result<SchemaDocument> {
        super::converter::convert_spec_to_document(&self.spec)
    }

    /// Get a reference to the underlying OpenAPI spec
    pub fn spec(&self) -> &OpenApiSpec {
        &self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_openapi() {
        let openapi_json = r#"{
            "openapi": "3.0.0",
            "components": {
                "schemas": {}
            }
        }"#;

        let parser = SchemaParser::from_json(openapi_json);
        assert!(parser.is_ok());

        let document = parser.unwrap().parse().unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_parse_without_components() {
        let parser = SchemaParser::from_json(r#"{"openapi": "3.0.0"}"#).unwrap();
        let document = parser.parse().unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = SchemaParser::from_json("not json");
        assert!(matches!(
            result,
            Err(ts_model_generator_common::GeneratorError::Parse(_))
        ));
    }
}
