use std::borrow::Cow;

use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use crate::application::render::types::RenderError;
use crate::domain::normalize_line_endings;

use super::CLASS_PREFIX;

/// Line-numbered table markup for one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HighlightedFragment {
    html: String,
    lines: usize,
}

impl HighlightedFragment {
    pub(crate) fn html(&self) -> &str {
        &self.html
    }

    pub(crate) fn lines(&self) -> usize {
        self.lines
    }

    pub(crate) fn into_html(self) -> String {
        self.html
    }
}

pub(crate) fn highlight_code(
    code: &str,
    syntax: &SyntaxReference,
    syntax_set: &SyntaxSet,
    class_style: &ClassStyle,
) -> Result<HighlightedFragment, RenderError> {
    let code_with_newline = prepared_source(code);

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, *class_style);

    let mut lines = 0;
    for line in LinesWithEndings::from(code_with_newline.as_ref()) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|err| RenderError::Highlighting {
                language: syntax.name.clone(),
                message: err.to_string(),
            })?;
        lines += 1;
    }

    let highlighted = generator.finalize();
    Ok(line_table(lines, &highlighted))
}

/// Render the whole text as one error-category span. Used when the lexer
/// gives up, so arbitrary input still yields a page.
pub(crate) fn fallback_fragment(code: &str) -> HighlightedFragment {
    let code_with_newline = prepared_source(code);
    let lines = LinesWithEndings::from(code_with_newline.as_ref()).count();
    let body = format!(
        "<span class=\"{CLASS_PREFIX}invalid\">{}</span>",
        ammonia::clean_text(&code_with_newline)
    );
    line_table(lines, &body)
}

pub(crate) fn find_syntax<'a>(syntax_set: &'a SyntaxSet, token: &str) -> Option<&'a SyntaxReference> {
    let lowercase = token.to_ascii_lowercase();
    syntax_set
        .find_syntax_by_token(&lowercase)
        .or_else(|| syntax_set.find_syntax_by_name(token))
        .or_else(|| syntax_set.find_syntax_by_extension(&lowercase))
}

// Line endings are folded first so the number column counts the same lines
// a browser breaks inside `<pre>`.
fn prepared_source(code: &str) -> Cow<'_, str> {
    let code = normalize_line_endings(code);
    if code.ends_with('\n') {
        code
    } else {
        let mut owned = code.into_owned();
        owned.push('\n');
        Cow::Owned(owned)
    }
}

// Numbers and code sit in separate cells so copying the code column never
// picks up line numbers.
fn line_table(lines: usize, code_html: &str) -> HighlightedFragment {
    let numbers = (1..=lines)
        .map(|number| number.to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!(
        "<div class=\"highlight\"><table class=\"highlighttable\"><tr>\
         <td class=\"linenos\"><div class=\"linenodiv\"><pre>{numbers}</pre></div></td>\
         <td class=\"code\"><div><pre>{code_html}</pre></div></td>\
         </tr></table></div>"
    );

    HighlightedFragment { html, lines }
}
