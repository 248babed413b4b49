//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! Stage progress goes through [`ConsoleReporter`], which implements
//! the pipeline's [`Reporter`] contract: the start line is printed
//! strictly before a stage's side effects, the glyph line strictly
//! after.

use std::fmt::Display;

use crate::scaffold::pipeline::{PipelineError, Reporter, Stage};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Prints stage progress to the terminal.
///
/// One line per transition: `⠿` while a stage is running, `✔` once it
/// completed, `✖` when it failed. Progress lines honor quiet mode; the
/// failure line always prints.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    verbosity: Verbosity,
}

impl ConsoleReporter {
    /// Create a reporter with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl Reporter for ConsoleReporter {
    fn stage_started(&self, stage: Stage) {
        print(format!("⠿ {}", stage.start_message()), self.verbosity);
    }

    fn stage_completed(&self, stage: Stage) {
        print(format!("✔ {}", stage.done_message()), self.verbosity);
    }

    fn pipeline_failed(&self, stage: Stage, error: &PipelineError) {
        debug(
            format!("pipeline stopped at {}", stage.name()),
            self.verbosity,
        );
        eprintln!("✖ {}", error);
    }
}
