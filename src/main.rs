use std::process;

use clap::Parser;
use synpage::{
    application::{
        convert::convert_file,
        error::{AppError, ErrorReport},
        render::render_service,
    },
    config::{self, CliArgs},
    infra::{error::InfraError, telemetry},
};
use tracing::{dispatcher, error};

fn main() {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // Usage problems exit 1 like every other failure; help and
            // version requests are not failures.
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(error) = run(args) {
        report_application_error(&error);
        match &error {
            AppError::NotFound { .. } => eprintln!("[-] Error: {error}"),
            _ => eprintln!("[-] An error occurred: {error}"),
        }
        process::exit(1);
    }
}

// Logging may not be up yet when configuration itself failed; the console
// line printed by `main` covers that case.
fn report_application_error(error: &AppError) {
    if !dispatcher::has_been_set() {
        return;
    }

    let report = ErrorReport::from_error("synpage::main", error);
    error!(origin = report.origin, messages = ?report.messages, "conversion failed");
}

fn run(args: CliArgs) -> Result<(), AppError> {
    let settings = config::load(args.config_file.as_deref(), &args.logging)
        .map_err(|err| InfraError::configuration(err.to_string()))?;
    telemetry::init(&settings.logging)?;

    let service = render_service();
    let output = convert_file(service.as_ref(), &args.input, args.output.as_deref())?;

    println!("[+] HTML file successfully created: {}", output.display());
    println!("[+] Open it in a browser to view");
    Ok(())
}
