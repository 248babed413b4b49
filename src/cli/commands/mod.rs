//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls into the scaffold pipeline
//! 3. Formats and displays output
//!
//! Handlers do NOT render templates or spawn subprocesses directly;
//! that is the pipeline's job.

mod completion;
mod new;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use new::new;

use crate::cli::args::Command;
use crate::scaffold::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::New {
            name,
            module,
            skip_mocks,
            skip_tests,
            skip_git,
        } => new(
            ctx,
            &name,
            module.as_deref(),
            skip_mocks,
            skip_tests,
            skip_git,
        ),
        Command::Completion { shell } => completion(shell),
    }
}
