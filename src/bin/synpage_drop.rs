//! synpage-drop: interactive drop zone in the terminal.
//!
//! Dragging a file onto most terminal windows pastes its path; this binary
//! reads those paths and converts each `.py` file as it arrives.

use std::{io, process};

use clap::Parser;
use synpage::{
    application::{error::AppError, render::render_service, session::DropSession},
    config::{self, DropArgs},
    infra::{error::InfraError, opener::system_opener, telemetry},
    presentation::terminal::{TerminalDialogs, run_drop_zone},
};
use tracing::error;

fn main() {
    if let Err(error) = run() {
        error!(error = %error, "drop zone stopped");
        eprintln!("[-] {error}");
        process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = DropArgs::parse();
    let settings = config::load(args.config_file.as_deref(), &args.logging)
        .map_err(|err| InfraError::configuration(err.to_string()))?;
    telemetry::init(&settings.logging)?;

    let stdin = io::stdin();
    let dialogs = TerminalDialogs::new(stdin.lock(), io::stdout());
    let mut session = DropSession::new(render_service(), dialogs, system_opener());

    run_drop_zone(&mut session, &args.directory)
}
