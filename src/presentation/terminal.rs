//! Line-oriented stand-in for a drop-zone window.

use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::application::{
    error::AppError,
    session::{Dialogs, DropSession},
};
use crate::infra::{error::InfraError, opener::Opener};

use super::{
    drop_input::{DropCommand, parse_command},
    picker::{choose, format_listing, list_candidates},
};

const BANNER: &str = "\
Python Code Highlighter - Monokai
Drag & drop a .py file here and press Enter, or press Enter to pick a file.
Type `q` to quit.";
const PROMPT: &str = "drop> ";

pub struct TerminalDialogs<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalDialogs<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `prompt` and read one line; `None` once input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.say(text) {
            debug!(target = "synpage::terminal", error = %err, "terminal write failed");
        }
    }
}

impl<R, W> Dialogs for TerminalDialogs<R, W>
where
    R: BufRead,
    W: Write,
{
    fn set_status(&mut self, status: &str) {
        self.emit(&format!("[{status}]"));
    }

    fn warning(&mut self, title: &str, message: &str) {
        self.emit(&format!("[!] {title}: {message}"));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.emit(&format!("[-] {title}: {message}"));
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.emit(&format!("[+] {title}\n{message}"));
        match self.prompt("[Y/n] ") {
            Ok(Some(answer)) => !matches!(
                answer.trim().to_ascii_lowercase().as_str(),
                "n" | "no"
            ),
            Ok(None) => false,
            Err(err) => {
                debug!(target = "synpage::terminal", error = %err, "terminal read failed");
                false
            }
        }
    }
}

/// Run the prompt loop until the user quits or input ends.
///
/// Conversion and picker failures are shown and the loop continues; only a
/// failing terminal read or write ends it with an error.
pub fn run_drop_zone<R, W, O>(
    session: &mut DropSession<TerminalDialogs<R, W>, O>,
    directory: &Path,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    O: Opener,
{
    session.dialogs_mut().say(BANNER).map_err(InfraError::from)?;

    while let Some(line) = session.dialogs_mut().prompt(PROMPT).map_err(InfraError::from)? {
        match parse_command(&line) {
            DropCommand::Quit => break,
            DropCommand::Pick => pick_file(session, directory)?,
            DropCommand::Drop(path) => {
                session.drop_path(&path);
            }
            DropCommand::Ignore => {
                debug!(
                    target = "synpage::terminal",
                    line = line.trim(),
                    "ignored drop without a usable path"
                );
            }
        }
    }

    Ok(())
}

fn pick_file<R, W, O>(
    session: &mut DropSession<TerminalDialogs<R, W>, O>,
    directory: &Path,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    O: Opener,
{
    let candidates = match list_candidates(directory) {
        Ok(candidates) => candidates,
        Err(err) => {
            warn!(
                target = "synpage::terminal",
                directory = %directory.display(),
                error = %err,
                "could not list candidates"
            );
            let err = AppError::from(err);
            let message = format!("{}:\n{err}", err.presentation_message());
            session.dialogs_mut().error("Error", &message);
            return Ok(());
        }
    };
    if candidates.is_empty() {
        session.dialogs_mut().warning(
            "Select Python file",
            &format!("No .py files in {}", directory.display()),
        );
        return Ok(());
    }

    let dialogs = session.dialogs_mut();
    dialogs
        .say(&format_listing(&candidates))
        .map_err(InfraError::from)?;
    let Some(answer) = dialogs.prompt("file number> ").map_err(InfraError::from)? else {
        return Ok(());
    };

    match choose(&candidates, &answer) {
        Some(path) => {
            session.process_file(path);
        }
        None if answer.trim().is_empty() => {}
        None => session
            .dialogs_mut()
            .warning("Select Python file", "No file with that number"),
    }

    Ok(())
}
