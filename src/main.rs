use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod scaffold;
mod templates;
mod util;
mod workflow;

use cli::{Command, RootArgs};

/// Log to stderr so the package manager's inherited stdout stays readable.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "cypress_scaffold=info".into()),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let args = RootArgs::parse();
    init_tracing();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RootArgs) -> Result<()> {
    match args.command {
        Command::Init => workflow::run_init_command(),
    }
}
