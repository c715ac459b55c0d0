use askama::{Error as AskamaError, Template};
use thiserror::Error;

/// The complete standalone page wrapped around a highlighted fragment.
///
/// `display_name` goes through askama's HTML escaping; `stylesheet` and
/// `fragment` are trusted markup and inserted as-is.
#[derive(Debug, Template)]
#[template(path = "document.html")]
pub struct DocumentView<'a> {
    pub display_name: &'a str,
    pub language: &'a str,
    pub stylesheet: &'a str,
    pub fragment: &'a str,
}

#[derive(Debug, Error)]
#[error("{public_message}: {error}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }

    pub fn origin(&self) -> &'static str {
        self.origin
    }
}

pub fn render_template<T: Template>(template: &T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
    })
}
