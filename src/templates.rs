//! Static file bodies emitted into the target project.
//!
//! Bodies live under `templates/` and are compiled in so the written bytes
//! never depend on the working directory the tool runs from.
pub const CYPRESS_CONFIG_JS: &str = include_str!("../templates/cypress.config.js");
pub const CYPRESS_WORKFLOW_FULL_YML: &str = include_str!("../templates/cypress_full.yml");
pub const CYPRESS_WORKFLOW_MINIMAL_YML: &str = include_str!("../templates/cypress_minimal.yml");
pub const DEMO_SPEC_JS: &str = include_str!("../templates/demo.cy.js");

/// Repository slug baked into the badge until the user edits it by hand.
pub const BADGE_REPO_PLACEHOLDER: &str = "YOUR_REPO";

/// Header written below the badge when the project has no README yet.
pub const README_HEADER: &str = "# Project\n";

/// Markdown badge linking to the workflow run history of `repo`.
pub fn readme_badge(repo: &str) -> String {
    format!(
        "[![Cypress Tests](https://github.com/{repo}/actions/workflows/cypress.yml/badge.svg)](https://github.com/{repo}/actions)\n\n"
    )
}
