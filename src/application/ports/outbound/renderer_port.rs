//! Template rendering port

use std::path::Path;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template {0} either does not exist or is not a file")]
    TemplateNotFound(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("unknown placeholder '{0}' in template")]
    UnknownPlaceholder(String),
    #[error("placeholder '{0}' does not resolve to a scalar value")]
    NonScalarPlaceholder(String),
    #[error("unterminated placeholder in template")]
    UnterminatedPlaceholder,
}

/// Substitutes the presentation model into a document template.
///
/// A missing template is reported before any substitution is attempted.
pub trait TemplateRendererPort {
    fn render(&self, template: &Path, context: &Value) -> Result<String, RenderError>;
}
