//! Error taxonomy for the scaffolding steps.
//!
//! Every variant is fatal to an invocation; callers report and stop.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure raised by one of the scaffolding steps.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(
        "no package.json found at {}; run this command from the root of a Node.js project",
        .path.display()
    )]
    MissingManifest { path: PathBuf },

    #[error("invalid package.json at {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("file system error at {}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("package manager `{program}` not found on PATH")]
    InstallerNotFound { program: String },

    #[error("failed to start `{program}`")]
    InstallSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("dependency install failed with {}", describe_exit(.code))]
    InstallFailed { code: Option<i32> },
}

impl ScaffoldError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
