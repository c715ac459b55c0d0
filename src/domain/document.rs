//! Transient values that flow through a single conversion.
//!
//! A [`SourceDocument`] is created when a front end reads its input and is
//! dropped as soon as the renderer has consumed it. A [`RenderedDocument`] is
//! the finished page; neither is ever mutated after construction.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use super::error::DomainError;

/// Extension accepted by the interactive drop zone.
pub const SOURCE_EXTENSION: &str = "py";
/// Extension given to derived output paths.
pub const OUTPUT_EXTENSION: &str = "html";

const UTF8_BOM: char = '\u{feff}';

/// An input file's path and decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    path: PathBuf,
    text: String,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Decode raw file bytes as UTF-8, dropping a leading byte-order mark
    /// and folding `\r\n` and bare `\r` line endings into `\n`.
    pub fn decode(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let text = String::from_utf8(bytes).map_err(|err| DomainError::encoding(err.to_string()))?;
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text.as_str());
        let text = normalize_line_endings(text).into_owned();
        Ok(Self::new(path, text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Name shown in the page header and title.
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }
}

/// Final HTML page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    html: String,
}

impl RenderedDocument {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    pub fn len(&self) -> usize {
        self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// `text` with every `\r\n` and lone `\r` replaced by `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Base name of `path`, or the whole path when it has no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sibling path with the extension swapped for `.html`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// An explicit output path always wins over the derived sibling.
pub fn resolve_output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input),
    }
}

pub fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}
