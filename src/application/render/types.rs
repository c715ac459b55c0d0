use thiserror::Error;

use crate::domain::{DomainError, RenderedDocument, SourceDocument};

/// Rendering request passed into the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Shown in the page header and title. Escaped by the template.
    pub display_name: String,
    /// Decoded source text, passed to the lexer untouched.
    pub source: String,
}

impl RenderRequest {
    pub fn new(source: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            source: source.into(),
        }
    }

    /// Build a request from raw bytes, failing when they are not UTF-8.
    pub fn decode(bytes: Vec<u8>, display_name: impl Into<String>) -> Result<Self, RenderError> {
        let display_name = display_name.into();
        let document = SourceDocument::decode(display_name.as_str(), bytes)?;
        Ok(Self::new(document.text(), display_name))
    }
}

impl From<&SourceDocument> for RenderRequest {
    fn from(document: &SourceDocument) -> Self {
        Self::new(document.text(), document.display_name())
    }
}

/// Structured errors surfaced by the rendering pipeline.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("source is not valid UTF-8: {message}")]
    Encoding { message: String },
    #[error("syntax highlighting failed: {language}: {message}")]
    Highlighting { language: String, message: String },
    #[error("document template failed: {message}")]
    Template { message: String },
}

impl From<DomainError> for RenderError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Encoding { message } => RenderError::Encoding { message },
        }
    }
}

/// Trait exposed by the rendering pipeline. Implementations must be pure and
/// deterministic: given the same input, they return identical outputs or errors.
pub trait RenderService: Send + Sync {
    fn render(&self, request: &RenderRequest) -> Result<RenderedDocument, RenderError>;
}
