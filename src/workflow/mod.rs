//! Workflow orchestration for the `init` command.
//!
//! The CLI stays thin: it resolves the project root and configuration, then
//! hands off to the step sequence in [`init`].
mod init;

pub use init::run_init_command;
