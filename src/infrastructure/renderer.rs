//! LaTeX template rendering adapter
//!
//! Substitutes `\VAR{dotted.path}` placeholders with values from the
//! assembled render context. The delimiters are LaTeX-friendly so templates
//! stay valid documents; control structures are the template's own business
//! and pass through untouched.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::application::ports::outbound::{RenderError, TemplateRendererPort};

const VAR_OPEN: &str = "\\VAR{";

#[derive(Debug, Default)]
pub struct LatexTemplateRenderer;

impl LatexTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRendererPort for LatexTemplateRenderer {
    fn render(&self, template: &Path, context: &Value) -> Result<String, RenderError> {
        if !template.is_file() {
            return Err(RenderError::TemplateNotFound(
                template.display().to_string(),
            ));
        }
        let text = fs::read_to_string(template)
            .map_err(|e| RenderError::Io(format!("{}: {}", template.display(), e)))?;

        let mut rendered = String::with_capacity(text.len());
        let mut rest = text.as_str();
        while let Some(start) = rest.find(VAR_OPEN) {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + VAR_OPEN.len()..];
            let end = after
                .find('}')
                .ok_or(RenderError::UnterminatedPlaceholder)?;
            let path = &after[..end];
            let value = lookup(context, path)
                .ok_or_else(|| RenderError::UnknownPlaceholder(path.to_string()))?;
            let replacement = scalar_text(value)
                .ok_or_else(|| RenderError::NonScalarPlaceholder(path.to_string()))?;
            rendered.push_str(&replacement);
            rest = &after[end + 1..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}

/// Walk a dotted path through objects and arrays
fn lookup<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    let mut value = context;
    for segment in path.split('.') {
        value = match value {
            Value::Object(map) => map.get(segment)?,
            Value::Array(seq) => seq.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(value)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
