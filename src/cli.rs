//! CLI argument parsing.
use clap::{Parser, Subcommand};

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "cypress-scaffold",
    version,
    about = "Bootstrap a Cypress testing setup into an existing Node.js project",
    after_help = "Run from the project root (the directory holding package.json).\n\nEnvironment:\n  CYPRESS_SCAFFOLD_PROFILE          full (default) or minimal\n  CYPRESS_SCAFFOLD_INSTALL_COMMAND  replaces `npm install` (packages are appended)\n  RUST_LOG                          log filter (default cypress_scaffold=info)",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize Cypress mock integration template
    Init,
}
