//! Run configuration resolved from the environment.
//!
//! Resolution goes through a lookup function so tests never touch the
//! process environment.
use crate::scaffold::InstallCommand;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Selects the template set (`full` or `minimal`).
pub const PROFILE_ENV: &str = "CYPRESS_SCAFFOLD_PROFILE";
/// Replaces `npm install`; split with shell-words.
pub const INSTALL_COMMAND_ENV: &str = "CYPRESS_SCAFFOLD_INSTALL_COMMAND";

/// Which template set a run emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaffoldProfile {
    /// Extended workflow, demo spec and README badge.
    #[default]
    Full,
    /// Short workflow and config only.
    Minimal,
}

impl ScaffoldProfile {
    pub fn updates_readme(self) -> bool {
        matches!(self, Self::Full)
    }
}

impl FromStr for ScaffoldProfile {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "minimal" => Ok(Self::Minimal),
            _ => Err(ConfigError::UnknownProfile(value.to_string())),
        }
    }
}

impl fmt::Display for ScaffoldProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("full"),
            Self::Minimal => f.write_str("minimal"),
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown CYPRESS_SCAFFOLD_PROFILE value `{0}` (expected `full` or `minimal`)")]
    UnknownProfile(String),
    #[error("parse CYPRESS_SCAFFOLD_INSTALL_COMMAND: {0}")]
    InstallCommandSyntax(#[from] shell_words::ParseError),
    #[error("CYPRESS_SCAFFOLD_INSTALL_COMMAND is empty")]
    EmptyInstallCommand,
}

/// Settings for one `init` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub profile: ScaffoldProfile,
    pub install_command: InstallCommand,
}

impl ScaffoldConfig {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from `lookup`.
    ///
    /// An unset or blank profile keeps the default. An unset install command
    /// keeps `npm install`, but a set-but-blank one is rejected with
    /// [`ConfigError::EmptyInstallCommand`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = non_blank(lookup(PROFILE_ENV)) {
            config.profile = raw.parse()?;
        }
        if let Some(raw) = lookup(INSTALL_COMMAND_ENV) {
            let words = shell_words::split(&raw)?;
            config.install_command =
                InstallCommand::from_words(words).ok_or(ConfigError::EmptyInstallCommand)?;
        }
        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
