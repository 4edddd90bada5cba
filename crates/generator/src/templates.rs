//! Template loading and management

use tera::Tera;
use ts_model_generator_common::{GeneratorError, Result};

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template("model.ts", include_str!("../templates/model.ts.tera"))
        .map_err(|e| {
            GeneratorError::Generation(format!("Failed to load model.ts template: {}", e))
        })?;

    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        let tera = load_templates().unwrap();
        assert!(tera.get_template_names().any(|n| n == "model.ts"));
    }
}
