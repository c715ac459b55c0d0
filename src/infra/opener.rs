//! "Open this file with whatever the desktop uses for it."
//!
//! One backend per operating-system family, chosen once at startup. Launches
//! are fire-and-forget: the child is spawned and never waited on.

use std::{
    fmt,
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

use super::error::InfraError;

/// Hands a file to the host's default handler.
pub trait Opener {
    fn open(&self, path: &Path) -> Result<(), InfraError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    /// Command line that asks this platform to open `path`.
    pub fn command(self, path: &Path) -> Command {
        match self {
            Platform::Windows => {
                let mut command = Command::new("cmd");
                // The empty string is `start`'s window title; without it a
                // quoted path would be taken as the title.
                command.args(["/C", "start", ""]).arg(path);
                command
            }
            Platform::MacOs => {
                let mut command = Command::new("open");
                command.arg(path);
                command
            }
            Platform::Unix => {
                let mut command = Command::new("xdg-open");
                command.arg(path);
                command
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Unix => "unix",
        };
        f.write_str(name)
    }
}

/// Opener backed by the platform's launcher executable.
#[derive(Debug, Clone, Copy)]
pub struct SystemOpener {
    platform: Platform,
}

impl SystemOpener {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> Result<(), InfraError> {
        let mut command = self.platform.command(path);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = command
            .spawn()
            .map_err(|err| InfraError::launch(path, err))?;

        debug!(
            target = "synpage::opener",
            platform = %self.platform,
            pid = child.id(),
            path = %path.display(),
            "launched default handler"
        );
        Ok(())
    }
}

/// Opener for the platform this binary was built for.
pub fn system_opener() -> SystemOpener {
    SystemOpener::new(Platform::current())
}
