//! Error types for template loading and rendering.
//!
//! All public operations return [`RenderError`]. Two kinds matter to callers
//! of a page pipeline: [`RenderError::TemplateNotFound`] when a named template
//! does not exist, and [`RenderError::Render`] when the substituted text is not
//! valid JSON. A key missing from the context is never an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving or rendering a template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No template is registered under the requested name.
    #[error("template not found: \"{name}\"")]
    TemplateNotFound { name: String },

    /// The text assembled after substitution does not parse as JSON.
    ///
    /// The assembled text is kept so the offending substitution can be found.
    #[error("rendered template is not valid JSON: {source}")]
    Render {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    /// A template file exists in the registry but could not be read.
    #[error("failed to read template \"{}\": {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template directory does not exist or is not a directory.
    #[error("template directory not found: {}", .path.display())]
    TemplateDir { path: PathBuf },

    /// Two template directories provide a template with the same name.
    #[error(
        "template collision detected for \"{name}\":\n  - {}\n  - {}",
        .existing.display(),
        .conflicting.display()
    )]
    Collision {
        name: String,
        existing: PathBuf,
        conflicting: PathBuf,
    },

    /// Caller data could not be converted into a context or a document
    /// could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RenderError {
    /// Returns the assembled text of a failed render, if this is one.
    pub fn assembled_text(&self) -> Option<&str> {
        match self {
            RenderError::Render { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
