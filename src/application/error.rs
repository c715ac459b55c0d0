use std::{error::Error as StdError, path::PathBuf};

use thiserror::Error;

use crate::{application::render::RenderError, infra::error::InfraError};

/// Flattened view of an error and its sources, outermost first.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub origin: &'static str,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(origin: &'static str, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self { origin, messages }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl AppError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }

    /// Short user-facing summary. Only "not found" is told apart; every
    /// other failure shares one message and carries its detail separately.
    pub fn presentation_message(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "File not found",
            AppError::Render(_) | AppError::Infra(_) => "An error occurred",
        }
    }
}
