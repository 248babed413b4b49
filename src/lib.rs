//! Girder - a CLI that scaffolds Go backend service projects
//!
//! Girder is a single-binary tool that lays down the skeleton of a new
//! backend service (layered Go project structure, build files, CI
//! templates) and then drives the post-generation toolchain: dependency
//! download, mock generation, test run, and git initialization.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to the pipeline)
//! - [`scaffold`] - Template table, concurrent file generation, shell stages, pipeline
//! - [`core`] - Strong domain types: ProjectName, ProjectRequest
//! - [`ui`] - Output formatting and stage progress reporting
//!
//! # Correctness Invariants
//!
//! 1. Validation runs before any filesystem or shell side effect
//! 2. Every generated path and every shell working directory is rooted
//!    at the project name; no mapping escapes that root
//! 3. Stages run strictly forward; the first failure aborts all
//!    remaining stages

pub mod cli;
pub mod core;
pub mod scaffold;
pub mod ui;
