//! Interactive conversion: a drop zone that accepts one file at a time.
//!
//! The session only knows two seams. [`Dialogs`] is whatever surface shows
//! status and asks questions; [`Opener`] hands a finished page to the
//! desktop. Conversion runs synchronously on the caller's thread.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{info, warn};

use crate::application::{convert::convert_file, render::RenderService};
use crate::domain::{SOURCE_EXTENSION, display_name, has_source_extension};
use crate::infra::opener::Opener;

pub const STATUS_READY: &str = "Ready";
pub const STATUS_NOT_FOUND: &str = "Error: file not found";
pub const STATUS_FAILED: &str = "Error during processing";

/// Status line, modal messages, and yes/no questions.
pub trait Dialogs {
    fn set_status(&mut self, status: &str);
    fn warning(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
    /// Ask a yes/no question; the default answer is yes.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ShowingResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Wrong extension; nothing was read or written.
    Rejected,
    Converted { output: PathBuf, open_requested: bool },
    Failed { not_found: bool },
}

pub struct DropSession<D, O> {
    service: Arc<dyn RenderService>,
    dialogs: D,
    opener: O,
    state: SessionState,
}

impl<D, O> DropSession<D, O>
where
    D: Dialogs,
    O: Opener,
{
    pub fn new(service: Arc<dyn RenderService>, mut dialogs: D, opener: O) -> Self {
        dialogs.set_status(STATUS_READY);
        Self {
            service,
            dialogs,
            opener,
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    /// Handle a dropped item. Only `.py` files are converted.
    pub fn drop_path(&mut self, path: &Path) -> DropOutcome {
        if !has_source_extension(path) {
            info!(
                target = "synpage::session",
                path = %path.display(),
                "rejected drop with unexpected extension"
            );
            self.dialogs.warning(
                "Error",
                &format!("Please select a file with .{SOURCE_EXTENSION} extension"),
            );
            self.state = SessionState::Idle;
            return DropOutcome::Rejected;
        }

        self.process_file(path)
    }

    /// Convert a file chosen through the picker or accepted from a drop.
    pub fn process_file(&mut self, path: &Path) -> DropOutcome {
        self.dialogs
            .set_status(&format!("Processing file: {}", display_name(path)));

        let outcome = match convert_file(self.service.as_ref(), path, None) {
            Ok(output) => {
                self.dialogs
                    .set_status(&format!("Successfully created: {}", display_name(&output)));
                self.state = SessionState::ShowingResult;

                let open_requested = self.dialogs.confirm(
                    "Success!",
                    &format!(
                        "HTML file successfully created:\n{}\n\nOpen it in browser?",
                        output.display()
                    ),
                );
                if open_requested {
                    self.launch(&output);
                }

                DropOutcome::Converted {
                    output,
                    open_requested,
                }
            }
            Err(err) if err.is_not_found() => {
                self.state = SessionState::ShowingResult;
                self.dialogs.error("Error", err.presentation_message());
                self.dialogs.set_status(STATUS_NOT_FOUND);
                DropOutcome::Failed { not_found: true }
            }
            Err(err) => {
                warn!(
                    target = "synpage::session",
                    path = %path.display(),
                    error = %err,
                    "conversion failed"
                );
                self.state = SessionState::ShowingResult;
                self.dialogs.error(
                    "Error",
                    &format!("{}:\n{err}", err.presentation_message()),
                );
                self.dialogs.set_status(STATUS_FAILED);
                DropOutcome::Failed { not_found: false }
            }
        };

        self.state = SessionState::Idle;
        outcome
    }

    // Whether the handler actually started is not checked.
    fn launch(&self, output: &Path) {
        if let Err(err) = self.opener.open(output) {
            warn!(
                target = "synpage::session",
                path = %output.display(),
                error = %err,
                "could not launch default handler"
            );
        }
    }
}
