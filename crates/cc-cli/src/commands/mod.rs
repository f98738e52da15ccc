pub mod config;
pub mod elements;
pub mod price;
pub mod template;

use anyhow::{Context, Result};
use cc_core::{FormValues, Template};
use std::path::Path;

/// Load a template file, naming the file in any error
pub fn load_template(path: &Path) -> Result<Template> {
    Template::from_path(path).with_context(|| format!("Failed to load template {}", path.display()))
}

/// Load a form values file; no file means an empty form
pub fn load_form_values(path: Option<&Path>) -> Result<FormValues> {
    let Some(path) = path else {
        return Ok(FormValues::new());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form values {}", path.display()))?;
    let values: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    match values {
        serde_json::Value::Object(map) => Ok(map),
        _ => anyhow::bail!("Form values in {} must be a JSON object", path.display()),
    }
}
