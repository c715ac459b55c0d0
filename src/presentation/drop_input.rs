//! What a terminal receives when a file is dragged onto it.
//!
//! Terminals paste the dropped path as text, often shell-quoted
//! (`'/tmp/my file.py'`), backslash-escaped (`/tmp/my\ file.py`), or as a
//! `file://` URL. Only the first path of a multi-file drop is used.

use std::path::PathBuf;

use url::Url;

/// One line typed or pasted at the drop-zone prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropCommand {
    Quit,
    Pick,
    Drop(PathBuf),
    /// Pasted text that names no usable path.
    Ignore,
}

// Windows paths use backslashes as separators, so they are never escapes.
const BACKSLASH_ESCAPES: bool = cfg!(not(windows));

pub fn parse_command(line: &str) -> DropCommand {
    match line.trim() {
        "" | "pick" | "p" => DropCommand::Pick,
        "quit" | "q" | "exit" => DropCommand::Quit,
        other => match parse_dropped_path(other) {
            Some(path) => DropCommand::Drop(path),
            None => DropCommand::Ignore,
        },
    }
}

/// Extract the first dropped path from pasted text.
pub fn parse_dropped_path(input: &str) -> Option<PathBuf> {
    let token = first_token(input)?;

    if token.starts_with("file://") {
        return Url::parse(&token).ok()?.to_file_path().ok();
    }

    Some(PathBuf::from(token))
}

fn first_token(input: &str) -> Option<String> {
    let mut chars = input.trim_start().chars();
    let mut token = String::new();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => token.push(c),
            None => match c {
                '\'' | '"' => quote = Some(c),
                '\\' if BACKSLASH_ESCAPES => {
                    if let Some(escaped) = chars.next() {
                        token.push(escaped);
                    }
                }
                c if c.is_whitespace() => break,
                c => token.push(c),
            },
        }
    }

    (!token.is_empty()).then_some(token)
}
