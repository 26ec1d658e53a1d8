use std::collections::HashMap;

use serde::Serialize;
use tera::{Context, Tera, Value};

use crate::error::ExportError;

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// context's top-level fields become template variables. A `cell` filter is
/// registered for text placed inside `|` table rows.
pub fn render_template<C: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &C,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.register_filter("cell", cell_filter);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Escape a value for use inside a markup table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn cell_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(Value::String(escape_cell(&text)))
}
