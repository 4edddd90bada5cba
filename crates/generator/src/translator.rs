//! Schema node to TypeScript type expression translation
//!
//! The translator is pure: it walks one classified schema node and produces
//! the type expression text, recording every referenced schema name in the
//! caller-supplied import set along the way. No I/O happens here.

use ts_model_generator_common::SchemaNode;

/// Insertion-ordered, duplicate-suppressing set of referenced schema names
///
/// One import set belongs to one artifact's generation; references found
/// anywhere in the node tree (union members, intersection members, array
/// items, property values) land in the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    names: Vec<String>,
}

impl ImportSet {
    /// Create an empty import set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a referenced schema name; repeated insertions are ignored
    pub fn insert(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }

    /// Referenced names in first-seen order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// True when no references were recorded
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Translate one schema node into a TypeScript type expression
///
/// Recursion depth is bounded only by the input; enum-literal unions are
/// deliberately not parenthesized here, grouping is the concern of the
/// composition branches.
pub fn translate(node: &SchemaNode, imports: &mut ImportSet) -> String {
    match node {
        SchemaNode::Union(members) => format!("({})", join_members(members, " | ", imports)),
        SchemaNode::Intersection(members) => {
            format!("({})", join_members(members, " & ", imports))
        }
        SchemaNode::Reference(name) => {
            imports.insert(name);
            name.clone()
        }
        SchemaNode::Number => "number".to_string(),
        SchemaNode::String { enum_values: None } => "string".to_string(),
        SchemaNode::String {
            enum_values: Some(values),
        } => values
            .iter()
            .map(|value| format!("\"{}\"", value))
            .collect::<Vec<_>>()
            .join(" | "),
        SchemaNode::Boolean => "boolean".to_string(),
        SchemaNode::Array(items) => format!("{}[]", translate(items, imports)),
        SchemaNode::Object(properties) => {
            if properties.is_empty() {
                return "{}".to_string();
            }
            let lines: Vec<String> = properties
                .iter()
                .map(|property| {
                    format!(
                        "  {}{}: {};",
                        property.name,
                        if property.required { "" } else { "?" },
                        translate(&property.schema, imports)
                    )
                })
                .collect();
            format!("{{\n{}\n}}", lines.join("\n"))
        }
    }
}

fn join_members(members: &[SchemaNode], separator: &str, imports: &mut ImportSet) -> String {
    members
        .iter()
        .map(|member| translate(member, imports))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_model_generator_common::PropertyDefinition;

    fn string_node() -> SchemaNode {
        SchemaNode::String { enum_values: None }
    }

    #[test]
    fn test_translate_primitives() {
        let mut imports = ImportSet::new();
        assert_eq!(translate(&SchemaNode::Number, &mut imports), "number");
        assert_eq!(translate(&string_node(), &mut imports), "string");
        assert_eq!(translate(&SchemaNode::Boolean, &mut imports), "boolean");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_translate_union_is_grouped() {
        let node = SchemaNode::Union(vec![string_node(), SchemaNode::Number]);
        let mut imports = ImportSet::new();
        assert_eq!(translate(&node, &mut imports), "(string | number)");
    }

    #[test]
    fn test_translate_intersection_is_grouped() {
        let node = SchemaNode::Intersection(vec![
            SchemaNode::Reference("Base".to_string()),
            SchemaNode::Reference("Extra".to_string()),
        ]);
        let mut imports = ImportSet::new();
        assert_eq!(translate(&node, &mut imports), "(Base & Extra)");
        assert_eq!(imports.names(), ["Base", "Extra"]);
    }

    #[test]
    fn test_translate_array_of_integer() {
        let node = SchemaNode::Array(Box::new(SchemaNode::Number));
        let mut imports = ImportSet::new();
        assert_eq!(translate(&node, &mut imports), "number[]");
    }

    #[test]
    fn test_translate_enum_is_not_plain_string() {
        let node = SchemaNode::String {
            enum_values: Some(vec!["a".to_string(), "b".to_string()]),
        };
        let mut imports = ImportSet::new();
        let expression = translate(&node, &mut imports);
        assert_eq!(expression, "\"a\" | \"b\"");
        assert_ne!(expression, "string");
    }

    #[test]
    fn test_translate_object_required_marker() {
        let node = SchemaNode::Object(vec![
            PropertyDefinition {
                name: "id".to_string(),
                required: true,
                schema: string_node(),
            },
            PropertyDefinition {
                name: "label".to_string(),
                required: false,
                schema: string_node(),
            },
        ]);
        let mut imports = ImportSet::new();
        assert_eq!(
            translate(&node, &mut imports),
            "{\n  id: string;\n  label?: string;\n}"
        );
    }

    #[test]
    fn test_translate_empty_object() {
        let node = SchemaNode::Object(vec![]);
        let mut imports = ImportSet::new();
        assert_eq!(translate(&node, &mut imports), "{}");
    }

    #[test]
    fn test_nested_references_share_import_set() {
        // Track referenced twice at different depths, imported once
        let node = SchemaNode::Object(vec![
            PropertyDefinition {
                name: "top".to_string(),
                required: true,
                schema: SchemaNode::Reference("Track".to_string()),
            },
            PropertyDefinition {
                name: "history".to_string(),
                required: false,
                schema: SchemaNode::Array(Box::new(SchemaNode::Union(vec![
                    SchemaNode::Reference("Track".to_string()),
                    SchemaNode::Reference("Episode".to_string()),
                ]))),
            },
        ]);
        let mut imports = ImportSet::new();
        translate(&node, &mut imports);
        assert_eq!(imports.names(), ["Track", "Episode"]);
    }

    #[test]
    fn test_deeply_nested_composition() {
        let node = SchemaNode::Union(vec![
            SchemaNode::Intersection(vec![
                SchemaNode::Reference("A".to_string()),
                SchemaNode::Union(vec![string_node(), SchemaNode::Boolean]),
            ]),
            SchemaNode::Number,
        ]);
        let mut imports = ImportSet::new();
        assert_eq!(
            translate(&node, &mut imports),
            "((A & (string | boolean)) | number)"
        );
        assert_eq!(imports.names(), ["A"]);
    }
}
