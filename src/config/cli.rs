use std::path::PathBuf;

use clap::{Args, Parser, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the batch converter.
#[derive(Debug, Parser)]
#[command(
    name = "synpage",
    version,
    about = "Convert a Python source file into a highlighted, self-contained HTML page"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "SYNPAGE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Python source file to convert.
    #[arg(value_name = "INPUT", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Where to write the page; defaults to INPUT with an `.html` extension.
    #[arg(value_name = "OUTPUT", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Command-line arguments for the interactive drop zone.
#[derive(Debug, Parser)]
#[command(
    name = "synpage-drop",
    version,
    about = "Drop Python files onto the terminal to turn them into highlighted HTML pages"
)]
pub struct DropArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "SYNPAGE_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Directory listed by the file picker.
    #[arg(
        long = "dir",
        value_name = "PATH",
        default_value = ".",
        value_hint = ValueHint::DirPath
    )]
    pub directory: PathBuf,
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}
