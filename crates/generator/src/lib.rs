//! TypeScript model generation from classified schema documents
//!
//! This crate turns a `SchemaDocument` into one `.ts` artifact per named
//! schema: import lines for every cross-schema reference, followed by a
//! single `export type` declaration.

mod sink;
mod templates;
mod translator;

pub use sink::{DirectorySink, FileSink};
pub use translator::{translate, ImportSet};

use std::path::Path;
use tera::Tera;
use ts_model_generator_common::{GeneratorError, Result, SchemaDocument, SchemaNode};

/// Model generator
///
/// Drives per-schema generation: translate the node, collect its imports,
/// render the artifact body, and hand it to the sink. Each schema's
/// generation is independent; no state crosses schema boundaries.
pub struct ModelGenerator {
    document: SchemaDocument,
    tera: Tera,
}

impl ModelGenerator {
    /// Create a new model generator from a classified schema document
    pub fn new(document: SchemaDocument) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { document, tera })
    }

    /// The underlying schema document
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    /// Schema names in document order
    pub fn schema_names(&self) -> impl Iterator<Item = &str> {
        self.document.schemas.keys().map(String::as_str)
    }

    /// Generate the artifact for every schema in the document
    pub fn generate(&self, sink: &dyn FileSink) -> Result<()> {
        for name in self.document.schemas.keys() {
            self.generate_one(name, sink)?;
        }
        Ok(())
    }

    /// Generate the artifact for one named schema
    pub fn generate_one(&self, name: &str, sink: &dyn FileSink) -> Result<()> {
        let node = self
            .document
            .schemas
            .get(name)
            .ok_or_else(|| GeneratorError::Generation(format!("Unknown schema: {}", name)))?;

        let body = self.render_artifact(name, node)?;
        sink.write(&format!("{}.ts", name), &body)
    }

    /// Generate all artifacts into a directory, creating it if absent
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<()> {
        let sink = DirectorySink::create(output_dir)?;
        self.generate(&sink)
    }

    /// Render one artifact body: import lines, blank separator, declaration
    fn render_artifact(&self, name: &str, node: &SchemaNode) -> Result<String> {
        let mut imports = ImportSet::new();
        let type_expression = translate(node, &mut imports);

        let mut context = tera::Context::new();
        context.insert("name", name);
        context.insert("imports", imports.names());
        context.insert("type_expression", &type_expression);

        self.tera
            .render("model.ts", &context)
            .map_err(|e| GeneratorError::Generation(format!("Template error: {}", e)))
    }
}

/// Generate model artifacts (convenience function)
pub fn generate_models(document: SchemaDocument, output_path: &str) -> Result<()> {
    let generator = ModelGenerator::new(document)?;
    generator.generate_to_directory(Path::new(output_path))
}
