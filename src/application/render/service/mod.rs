mod highlight;
mod stylesheet;

use std::sync::Arc;

use once_cell::sync::Lazy;
use syntect::{
    html::ClassStyle,
    parsing::{SyntaxReference, SyntaxSet},
};
use tracing::{debug, warn};

use crate::application::render::types::{RenderError, RenderRequest, RenderService};
use crate::domain::RenderedDocument;
use crate::presentation::views::{DocumentView, render_template};

use highlight::{HighlightedFragment, fallback_fragment, find_syntax, highlight_code};

pub use stylesheet::STYLESHEET;

/// Prefix applied to every scope atom, e.g. `hl-keyword`.
pub const CLASS_PREFIX: &str = "hl-";
/// Human-readable name of the one grammar this renderer uses.
pub const LANGUAGE_NAME: &str = "Python";

const LANGUAGE_TOKEN: &str = "python";

/// Syntect-backed renderer emitting `hl-` prefixed CSS classes inside a
/// line-numbered table.
pub struct SyntectRenderService {
    syntax_set: SyntaxSet,
    class_style: ClassStyle,
}

impl SyntectRenderService {
    fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            class_style: ClassStyle::SpacedPrefixed {
                prefix: CLASS_PREFIX,
            },
        }
    }

    fn syntax(&self) -> &SyntaxReference {
        find_syntax(&self.syntax_set, LANGUAGE_TOKEN)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    fn fragment(&self, source: &str) -> HighlightedFragment {
        let syntax = self.syntax();
        match highlight_code(source, syntax, &self.syntax_set, &self.class_style) {
            Ok(fragment) => fragment,
            Err(err) => {
                warn!(
                    target = "synpage::render::highlight",
                    language = %syntax.name,
                    error = %err,
                    "lexer failed, rendering source as error spans"
                );
                fallback_fragment(source)
            }
        }
    }
}

static RENDER_SERVICE: Lazy<Arc<SyntectRenderService>> =
    Lazy::new(|| Arc::new(SyntectRenderService::new()));

/// Access the shared render service instance, initialised on first use.
pub fn render_service() -> Arc<SyntectRenderService> {
    Arc::clone(&RENDER_SERVICE)
}

impl RenderService for SyntectRenderService {
    fn render(&self, request: &RenderRequest) -> Result<RenderedDocument, RenderError> {
        page(request, &self.fragment(&request.source))
    }
}

fn page(
    request: &RenderRequest,
    fragment: &HighlightedFragment,
) -> Result<RenderedDocument, RenderError> {
    let view = DocumentView {
        display_name: &request.display_name,
        language: LANGUAGE_NAME,
        stylesheet: STYLESHEET,
        fragment: fragment.html(),
    };
    let html = render_template(&view).map_err(|err| {
        warn!(
            target = "synpage::render",
            origin = err.origin(),
            display_name = %request.display_name,
            error = %err,
            "document template failed"
        );
        RenderError::Template {
            message: err.to_string(),
        }
    })?;

    debug!(
        target = "synpage::render",
        display_name = %request.display_name,
        lines = fragment.lines(),
        bytes = html.len(),
        "rendered document"
    );

    Ok(RenderedDocument::new(html))
}

/// Highlight `source` into the bare line-numbered table, without the page
/// around it.
pub fn highlight_fragment(source: &str) -> String {
    render_service().fragment(source).into_html()
}
