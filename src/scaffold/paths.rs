//! Typed paths into the target project.
use super::{CYPRESS_CONFIG_REL, DEMO_SPEC_REL, MANIFEST_FILE, README_FILE, WORKFLOW_REL};
use std::path::{Path, PathBuf};

/// Locates every file the scaffold reads or writes, relative to one root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Return the project root used for path derivation.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the `package.json` path.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Return the `README.md` path.
    pub fn readme_path(&self) -> PathBuf {
        self.root.join(README_FILE)
    }

    /// Return the `cypress.config.js` path.
    pub fn cypress_config_path(&self) -> PathBuf {
        self.root.join(CYPRESS_CONFIG_REL)
    }

    /// Return the `.github/workflows/cypress.yml` path.
    pub fn workflow_path(&self) -> PathBuf {
        self.root.join(WORKFLOW_REL)
    }

    /// Return the `cypress/e2e/demo.cy.js` path.
    pub fn demo_spec_path(&self) -> PathBuf {
        self.root.join(DEMO_SPEC_REL)
    }
}
