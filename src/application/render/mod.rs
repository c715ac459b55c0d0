//! Source-to-page rendering.
//!
//! The pipeline is pure: it accepts decoded source text and a display name,
//! produces a complete HTML document, and surfaces structured errors. Reading
//! and writing files happens in the caller.

mod service;
mod types;

pub use service::{
    CLASS_PREFIX, LANGUAGE_NAME, STYLESHEET, SyntectRenderService, highlight_fragment,
    render_service,
};
pub use types::{RenderError, RenderRequest, RenderService};
