//! Numbered file picker over one directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::has_source_extension;
use crate::infra::error::InfraError;

/// Source files directly inside `directory`, sorted by name.
pub fn list_candidates(directory: &Path) -> Result<Vec<PathBuf>, InfraError> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| InfraError::read(directory, err.into()))?;
        if entry.file_type().is_file() && has_source_extension(entry.path()) {
            candidates.push(entry.into_path());
        }
    }

    Ok(candidates)
}

/// Numbered listing, one file per line, counting from 1.
pub fn format_listing(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .enumerate()
        .map(|(index, path)| format!("{:>3}) {}", index + 1, path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve a 1-based answer to a candidate.
pub fn choose<'a>(candidates: &'a [PathBuf], answer: &str) -> Option<&'a Path> {
    let number: usize = answer.trim().parse().ok()?;
    number
        .checked_sub(1)
        .and_then(|index| candidates.get(index))
        .map(PathBuf::as_path)
}
