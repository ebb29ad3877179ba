//! Pretty JSON export.

use crate::template::{Template, TemplateError};

/// Two-space indented JSON carrying every template field.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(template: &Template) -> Result<String, TemplateError> {
    template.to_json_pretty()
}
