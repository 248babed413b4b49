//! scaffold
//!
//! Project generation and the staged toolchain pipeline.
//!
//! # Modules
//!
//! - [`templates`] - The fixed template table and its rendering
//! - [`generate`] - Concurrent fan-out/fan-in file generation
//! - [`shell`] - Blocking subprocess execution behind a runner seam
//! - [`pipeline`] - Fail-fast stage orchestration and progress reporting
//!
//! # Design Principles
//!
//! - The generated file set is a static table, validated independently
//!   of rendering
//! - All external-world effects flow through one runner seam
//! - The first failure is terminal; nothing after it starts

pub mod generate;
pub mod pipeline;
pub mod shell;
pub mod templates;

use std::path::PathBuf;

/// Execution context for one invocation.
///
/// Contains global settings derived from CLI flags that affect command
/// behavior.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Emit a machine-readable pipeline summary.
    pub json: bool,
}
