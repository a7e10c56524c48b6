//! Shared test infrastructure for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Install command that records its arguments in `install.log` instead of
/// reaching the network.
pub const RECORDING_INSTALL: &str = r#"sh -c 'echo "$@" >> install.log' sh"#;

/// Temporary project directory driven through the built binary.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Empty project without a manifest.
    pub fn empty() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Project holding only `package.json` with `manifest` as its contents.
    pub fn with_manifest(manifest: &str) -> anyhow::Result<Self> {
        let project = Self::empty()?;
        std::fs::write(project.path("package.json"), manifest)?;
        Ok(project)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path(rel))
            .unwrap_or_else(|err| panic!("read {rel}: {err}"))
    }

    /// Run `cypress-scaffold init` in the project root.
    pub fn run_init(&self, install_command: &str, profile: Option<&str>) -> Output {
        let bin = env!("CARGO_BIN_EXE_cypress-scaffold");
        let mut command = Command::new(bin);
        command
            .arg("init")
            .current_dir(self.root())
            .env("CYPRESS_SCAFFOLD_INSTALL_COMMAND", install_command)
            .env_remove("CYPRESS_SCAFFOLD_PROFILE");
        if let Some(profile) = profile {
            command.env("CYPRESS_SCAFFOLD_PROFILE", profile);
        }
        command.output().expect("run cypress-scaffold")
    }
}
