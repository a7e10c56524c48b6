//! Idempotent project-scaffolding steps.
//!
//! Each step owns one concern (manifest, directories, templates, install) and
//! reports failures as [`ScaffoldError`](crate::error::ScaffoldError) so the
//! workflow layer can name the step that stopped the run.
mod directories;
mod emit;
mod install;
mod manifest;
mod paths;

pub use directories::ensure_directories;
pub use emit::{emit_templates, EmittedTemplates, ReadmeUpdate};
pub use install::{install_dependencies, InstallCommand};
pub use manifest::update_manifest;
pub use paths::ProjectPaths;

/// Project manifest file name, resolved against the project root.
pub const MANIFEST_FILE: &str = "package.json";
/// README that receives the workflow badge.
pub const README_FILE: &str = "README.md";
/// Cypress configuration file.
pub const CYPRESS_CONFIG_REL: &str = "cypress.config.js";
/// GitHub Actions workflow running the suite.
pub const WORKFLOW_REL: &str = ".github/workflows/cypress.yml";
/// Demo spec emitted by the full profile.
pub const DEMO_SPEC_REL: &str = "cypress/e2e/demo.cy.js";

/// Scripts merged into `package.json`, in insertion order.
pub const MANIFEST_SCRIPTS: [(&str, &str); 5] = [
    ("cypress:open", "cypress open"),
    ("cypress:run", "cypress run"),
    (
        "report:merge-json",
        "npx mochawesome-merge cypress/reports/*.json > cypress/reports/report.json",
    ),
    (
        "report:generate-html",
        "npx mochawesome-report-generator cypress/reports/report.json --reportDir cypress/reports --inline",
    ),
    (
        "report:generate",
        "npm run report:merge-json && npm run report:generate-html",
    ),
];

/// Directories ensured under the project root.
pub const SCAFFOLD_DIRECTORIES: [&str; 8] = [
    "cypress/fixtures",
    "cypress/e2e",
    "cypress/reports",
    "cypress/videos",
    "cypress/screenshots",
    "cypress/plugins",
    "cypress/support",
    ".github/workflows",
];

/// Packages installed in a single package-manager invocation.
pub const DEPENDENCIES: [&str; 4] = [
    "cypress",
    "mochawesome",
    "mochawesome-merge",
    "mochawesome-report-generator",
];
