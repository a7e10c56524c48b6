//! Workflow init step.
//!
//! Runs manifest update, directory layout, template emission and dependency
//! install strictly in that order. The manifest check goes first because it
//! is the only precondition. The first failure stops the run; steps that
//! already ran are not rolled back.
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::scaffold::{
    emit_templates, ensure_directories, install_dependencies, update_manifest, EmittedTemplates,
    ProjectPaths, ReadmeUpdate, SCAFFOLD_DIRECTORIES,
};
use crate::util::display_path;
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One step of the init sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep {
    UpdateManifest,
    EnsureDirectories,
    EmitTemplates,
    InstallDependencies,
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UpdateManifest => "update package.json",
            Self::EnsureDirectories => "create folder structure",
            Self::EmitTemplates => "write template files",
            Self::InstallDependencies => "install dependencies",
        };
        f.write_str(label)
    }
}

/// The step that stopped the run and why.
#[derive(Debug, Error)]
#[error("{step} failed")]
pub struct StepFailure {
    pub step: InitStep,
    #[source]
    pub source: ScaffoldError,
}

/// Summary of a successful run.
#[derive(Debug)]
pub struct InitReport {
    pub created_dirs: Vec<PathBuf>,
    pub templates: EmittedTemplates,
}

/// CLI entry: scaffold the current directory with environment configuration.
pub fn run_init_command() -> Result<()> {
    let config = ScaffoldConfig::from_env().context("resolve configuration")?;
    let root = std::env::current_dir().context("resolve current directory")?;
    println!("Initializing Cypress Mock Integration Template...");
    let report = run_init(&root, &config)?;
    println!(
        "Cypress setup complete ({} directories created, {} files written).",
        report.created_dirs.len(),
        report.templates.written.len()
    );
    Ok(())
}

/// Run every step against `root`, stopping at the first failure.
pub fn run_init(root: &Path, config: &ScaffoldConfig) -> Result<InitReport, StepFailure> {
    let paths = ProjectPaths::new(root.to_path_buf());
    tracing::info!(root = %root.display(), profile = %config.profile, "init started");

    run_step(InitStep::UpdateManifest, || update_manifest(&paths))?;
    println!("Scripts added to {}.", display_path(&paths.manifest_path(), Some(root)));

    let created_dirs = run_step(InitStep::EnsureDirectories, || {
        ensure_directories(paths.root(), &SCAFFOLD_DIRECTORIES)
    })?;
    println!(
        "Cypress folder structure ready ({} of {} created).",
        created_dirs.len(),
        SCAFFOLD_DIRECTORIES.len()
    );

    let templates = run_step(InitStep::EmitTemplates, || {
        emit_templates(&paths, config.profile)
    })?;
    for path in &templates.written {
        println!("wrote {}", display_path(path, Some(root)));
    }
    match templates.readme {
        Some(ReadmeUpdate::Appended) => println!("Cypress badge added to README."),
        Some(ReadmeUpdate::Created) => println!("README file created and Cypress badge added."),
        None => {}
    }

    let install_command = config.install_command.command_line();
    println!("Installing dependencies: {install_command}");
    run_step(InitStep::InstallDependencies, || {
        install_dependencies(paths.root(), &config.install_command)
    })?;

    tracing::info!(
        created_dirs = created_dirs.len(),
        written = templates.written.len(),
        "init complete"
    );
    Ok(InitReport {
        created_dirs,
        templates,
    })
}

fn run_step<T, F>(step: InitStep, action: F) -> Result<T, StepFailure>
where
    F: FnOnce() -> Result<T, ScaffoldError>,
{
    tracing::debug!(%step, "step started");
    action().map_err(|source| {
        tracing::debug!(%step, error = %source, "step failed");
        StepFailure { step, source }
    })
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
