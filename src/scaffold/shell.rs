//! scaffold::shell
//!
//! Blocking subprocess execution for the toolchain stages.
//!
//! # Design
//!
//! [`CommandRunner`] is the seam between the pipeline and the outside
//! world: every `make` and `git` invocation flows through it, always
//! with the generated project root as working directory. The pipeline
//! suspends until each subprocess exits; no two commands ever run
//! concurrently. Tests substitute a recording implementation.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from subprocess execution.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The program could not be started (missing binary, bad workdir).
    #[error("failed to run '{command}': {source}")]
    Spawn {
        /// The command line that failed to start
        command: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The program exited with a non-zero status.
    #[error("'{command}' exited with {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()))]
    NonZero {
        /// The command line that failed
        command: String,
        /// Exit code, when the process was not killed by a signal
        code: Option<i32>,
    },
}

/// Runs one external command to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, with `workdir` as working directory,
    /// and wait for it to exit. Succeeds only on exit status zero.
    fn run(&self, workdir: &Path, program: &str, args: &[&str]) -> Result<(), ShellError>;
}

/// [`CommandRunner`] over [`std::process::Command`].
///
/// Stdout and stderr are inherited so the invoked tools' own output
/// (compiler errors, test failures) reaches the user directly.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, workdir: &Path, program: &str, args: &[&str]) -> Result<(), ShellError> {
        let command_line = display_command(program, args);

        let status = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .status()
            .map_err(|source| ShellError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ShellError::NonZero {
                command: command_line,
                code: status.code(),
            })
        }
    }
}

/// Render a program and its arguments as one command line for messages.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
