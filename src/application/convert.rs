//! Read → render → write, shared by both front ends.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::application::{
    error::AppError,
    render::{RenderError, RenderRequest, RenderService},
};
use crate::domain::{SourceDocument, resolve_output_path};
use crate::infra::error::InfraError;

/// Convert `input` into an HTML page and return where it was written.
///
/// The page lands at `output` when given, otherwise next to the input with
/// an `.html` extension. Nothing is written when reading, decoding, or
/// rendering fails; a failed write may leave a partial file behind.
pub fn convert_file<S>(
    service: &S,
    input: &Path,
    output: Option<&Path>,
) -> Result<PathBuf, AppError>
where
    S: RenderService + ?Sized,
{
    if !input.exists() {
        return Err(AppError::not_found(input));
    }

    let bytes = fs::read(input).map_err(|err| InfraError::read(input, err))?;
    let document = SourceDocument::decode(input, bytes).map_err(RenderError::from)?;

    info!(
        target = "synpage::convert",
        input = %input.display(),
        bytes = document.text().len(),
        lines = document.line_count(),
        "read source"
    );

    let rendered = service.render(&RenderRequest::from(&document))?;

    let output_path = resolve_output_path(input, output);
    fs::write(&output_path, rendered.html())
        .map_err(|err| InfraError::write(&output_path, err))?;

    info!(
        target = "synpage::convert",
        input = %input.display(),
        output = %output_path.display(),
        bytes = rendered.len(),
        "wrote page"
    );

    Ok(output_path)
}
