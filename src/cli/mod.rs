//! cli
//!
//! Command-line interface layer for Girder.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT render templates or run subprocesses directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches
//! to the [`crate::scaffold`] pipeline, which owns all filesystem and
//! subprocess effects.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::scaffold::Context;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}
