//! Package-manager invocation.
//!
//! The install runs synchronously with inherited stdio so progress stays
//! visible. There is no timeout: a hung package manager hangs the run.
use super::DEPENDENCIES;
use crate::error::ScaffoldError;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Program plus leading arguments; the fixed package list is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    program: String,
    args: Vec<String>,
}

impl InstallCommand {
    /// `npm install`.
    pub fn npm() -> Self {
        Self {
            program: "npm".to_string(),
            args: vec!["install".to_string()],
        }
    }

    /// Build a command from already-split words; `None` when empty.
    pub fn from_words(mut words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        let program = words.remove(0);
        Some(Self {
            program,
            args: words,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full command line including the packages, shell-quoted for display.
    pub fn command_line(&self) -> String {
        let words = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .chain(DEPENDENCIES);
        shell_words::join(words)
    }
}

impl Default for InstallCommand {
    fn default() -> Self {
        Self::npm()
    }
}

/// Install the fixed dependency set by running `command` in `root`.
pub fn install_dependencies(root: &Path, command: &InstallCommand) -> Result<(), ScaffoldError> {
    let program = which::which(command.program()).map_err(|_| ScaffoldError::InstallerNotFound {
        program: command.program.clone(),
    })?;

    tracing::info!(
        program = %program.display(),
        packages = ?DEPENDENCIES,
        cwd = %root.display(),
        "installing dependencies"
    );
    let start = Instant::now();
    let status = Command::new(&program)
        .args(&command.args)
        .args(DEPENDENCIES)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ScaffoldError::InstallSpawn {
            program: command.program.clone(),
            source,
        })?;
    let elapsed_ms = start.elapsed().as_millis();

    tracing::info!(elapsed_ms, code = ?status.code(), "install finished");

    if !status.success() {
        return Err(ScaffoldError::InstallFailed {
            code: status.code(),
        });
    }
    Ok(())
}
