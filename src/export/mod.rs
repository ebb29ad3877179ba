//! Export — text, JSON and SVG renderings of a template, and where they go.
//!
//! DESIGN
//! ======
//! Renderers are pure functions of the template. Writing the result is
//! behind the `FileSink` port; the CLI falls back to printing the content
//! when the sink fails.

pub mod image;
pub mod json;
pub mod text;

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::info;

use crate::template::{Template, TemplateError};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("render failed: {0}")]
    Render(#[from] TemplateError),
}

/// Output format for a template export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
    Svg,
}

impl Format {
    /// File name for `template` in this format.
    #[must_use]
    pub fn file_name(self, template: &Template) -> String {
        let stem = file_stem(&template.title);
        match self {
            Self::Text => format!("{stem}_template.md"),
            Self::Json => format!("{stem}_template.json"),
            Self::Svg => format!("{stem}.svg"),
        }
    }
}

/// Render `template` in `format`.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(template: &Template, format: Format) -> Result<String, ExportError> {
    Ok(match format {
        Format::Text => text::render(template),
        Format::Json => json::render(template)?,
        Format::Svg => image::render_svg(template),
    })
}

/// Replace every character outside `[A-Za-z0-9]` with `_`.
#[must_use]
pub fn file_stem(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// =============================================================================
// FILE SINK
// =============================================================================

pub trait FileSink {
    /// Store `contents` under `name`, returning where it went.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents cannot be written.
    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, ExportError>;
}

/// Writes exports into a directory, creating it when missing.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for DirSink {
    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(name);
        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Write { path: self.dir.clone(), source })?;
        fs::write(&path, contents).map_err(|source| ExportError::Write { path: path.clone(), source })?;
        info!(path = %path.display(), bytes = contents.len(), "export: written");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
