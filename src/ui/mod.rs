//! ui
//!
//! User-facing output utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting, verbosity, and the console stage reporter
//!
//! # Design
//!
//! All printing flows through this module so quiet mode and message
//! formatting stay consistent across commands.

pub mod output;
