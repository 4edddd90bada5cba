//! Converts the raw OpenAPI document into the classified SchemaDocument IR
//!
//! All shape validation happens here, once, so the generator never probes
//! for optional fields. Recognized forms are checked in a fixed precedence
//! order: `oneOf`, then `allOf`, then `$ref`, then `type` dispatch.

use super::types::{OpenApiSpec, RawSchema};
use indexmap::IndexMap;
use ts_model_generator_common::{
    GeneratorError, PropertyDefinition, Result, SchemaDocument, SchemaNode,
};

/// Fixed prefix every schema reference must carry
pub const REF_PREFIX: &str = "#/components/schemas/";

/// Convert an OpenAPI spec into a SchemaDocument
pub fn convert_spec_to_document(spec: &OpenApiSpec) -> Result<SchemaDocument> {
    let mut schemas = IndexMap::new();

    for (name, raw) in spec.schemas() {
        let node = convert_node(raw, name)?;
        schemas.insert(name.clone(), node);
    }

    Ok(SchemaDocument { schemas })
}

/// Classify one raw schema fragment
///
/// `path` is the dotted node path rooted at the schema name, used in error
/// messages (e.g. "Album.properties.tracks.items").
pub fn convert_node(raw: &RawSchema, path: &str) -> Result<SchemaNode> {
    if let Some(members) = &raw.one_of {
        return convert_composition(members, path, "oneOf").map(SchemaNode::Union);
    }

    if let Some(members) = &raw.all_of {
        return convert_composition(members, path, "allOf").map(SchemaNode::Intersection);
    }

    if let Some(reference) = &raw.ref_path {
        let name = reference.strip_prefix(REF_PREFIX).ok_or_else(|| {
            GeneratorError::MalformedReference {
                reference: reference.clone(),
                path: path.to_string(),
            }
        })?;
        return Ok(SchemaNode::Reference(name.to_string()));
    }

    match raw.schema_type.as_deref() {
        Some("number") | Some("integer") => Ok(SchemaNode::Number),
        Some("string") => Ok(SchemaNode::String {
            enum_values: raw.enum_values.clone(),
        }),
        Some("boolean") => Ok(SchemaNode::Boolean),
        Some("array") => {
            let items = raw.items.as_deref().ok_or_else(|| {
                GeneratorError::MalformedSchema {
                    path: path.to_string(),
                    detail: "array schema missing items".to_string(),
                }
            })?;
            let inner = convert_node(items, &format!("{}.items", path))?;
            Ok(SchemaNode::Array(Box::new(inner)))
        }
        Some("object") => {
            let properties = raw.properties.as_ref().ok_or_else(|| {
                GeneratorError::MalformedSchema {
                    path: path.to_string(),
                    detail: "object schema missing properties".to_string(),
                }
            })?;
            let mut props = Vec::with_capacity(properties.len());
            for (name, value) in properties {
                let schema = convert_node(value, &format!("{}.properties.{}", path, name))?;
                props.push(PropertyDefinition {
                    name: name.clone(),
                    required: raw.required.contains(name),
                    schema,
                });
            }
            Ok(SchemaNode::Object(props))
        }
        Some(other) => Err(GeneratorError::UnsupportedSchema {
            path: path.to_string(),
            detail: format!("unrecognized type {:?}", other),
        }),
        None => Err(GeneratorError::UnsupportedSchema {
            path: path.to_string(),
            detail: "no recognized schema form (oneOf, allOf, $ref, or type)".to_string(),
        }),
    }
}

/// Convert the members of a oneOf/allOf composition
fn convert_composition(
    members: &[RawSchema],
    path: &str,
    keyword: &str,
) -> Result<Vec<SchemaNode>> {
    if members.is_empty() {
        return Err(GeneratorError::UnsupportedSchema {
            path: path.to_string(),
            detail: format!("empty {} array", keyword),
        });
    }

    members
        .iter()
        .enumerate()
        .map(|(i, member)| convert_node(member, &format!("{}.{}[{}]", path, keyword, i)))
        .collect()
}
