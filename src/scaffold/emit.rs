//! Template emission into the target project.
//!
//! Config, workflow and demo spec are overwritten unconditionally. The README
//! is the one file that is never replaced: it is appended to when present and
//! created only when absent.
use super::ProjectPaths;
use crate::config::ScaffoldProfile;
use crate::error::ScaffoldError;
use crate::templates;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// What happened to the README during emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeUpdate {
    /// Badge appended after the existing content.
    Appended,
    /// README created with the badge and a minimal header.
    Created,
}

/// Files written by [`emit_templates`].
#[derive(Debug)]
pub struct EmittedTemplates {
    pub written: Vec<PathBuf>,
    /// `None` when the profile leaves the README alone.
    pub readme: Option<ReadmeUpdate>,
}

struct TemplateFile {
    path: PathBuf,
    contents: &'static str,
}

fn overwrite_templates(paths: &ProjectPaths, profile: ScaffoldProfile) -> Vec<TemplateFile> {
    let mut files = vec![TemplateFile {
        path: paths.cypress_config_path(),
        contents: templates::CYPRESS_CONFIG_JS,
    }];
    match profile {
        ScaffoldProfile::Full => {
            files.push(TemplateFile {
                path: paths.workflow_path(),
                contents: templates::CYPRESS_WORKFLOW_FULL_YML,
            });
            files.push(TemplateFile {
                path: paths.demo_spec_path(),
                contents: templates::DEMO_SPEC_JS,
            });
        }
        ScaffoldProfile::Minimal => files.push(TemplateFile {
            path: paths.workflow_path(),
            contents: templates::CYPRESS_WORKFLOW_MINIMAL_YML,
        }),
    }
    files
}

/// Write the profile's templates and, for the full profile, the README badge.
pub fn emit_templates(
    paths: &ProjectPaths,
    profile: ScaffoldProfile,
) -> Result<EmittedTemplates, ScaffoldError> {
    let mut written = Vec::new();
    for template in overwrite_templates(paths, profile) {
        write_template_file(&template.path, template.contents)?;
        tracing::debug!(
            path = %template.path.display(),
            bytes = template.contents.len(),
            "template written"
        );
        written.push(template.path);
    }

    let readme = if profile.updates_readme() {
        let path = paths.readme_path();
        let update = add_readme_badge(&path)?;
        tracing::debug!(path = %path.display(), ?update, "readme badge added");
        written.push(path);
        Some(update)
    } else {
        None
    };

    Ok(EmittedTemplates { written, readme })
}

fn add_readme_badge(path: &Path) -> Result<ReadmeUpdate, ScaffoldError> {
    let badge = templates::readme_badge(templates::BADGE_REPO_PLACEHOLDER);
    if path.exists() {
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .map_err(|source| ScaffoldError::fs(path, source))?;
        file.write_all(badge.as_bytes())
            .map_err(|source| ScaffoldError::fs(path, source))?;
        Ok(ReadmeUpdate::Appended)
    } else {
        let mut contents = badge;
        contents.push_str(templates::README_HEADER);
        fs::write(path, contents).map_err(|source| ScaffoldError::fs(path, source))?;
        Ok(ReadmeUpdate::Created)
    }
}

fn write_template_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::fs(parent, source))?;
    }
    fs::write(path, contents.as_bytes()).map_err(|source| ScaffoldError::fs(path, source))
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
