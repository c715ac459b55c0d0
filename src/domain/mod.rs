//! Domain layer types and invariants.

pub mod document;
pub mod error;

pub use document::{
    OUTPUT_EXTENSION, RenderedDocument, SOURCE_EXTENSION, SourceDocument, derive_output_path,
    display_name, has_source_extension, normalize_line_endings, resolve_output_path,
};
pub use error::DomainError;
