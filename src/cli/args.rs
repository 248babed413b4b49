//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable pipeline summary

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Girder - scaffold Go backend service projects
#[derive(Parser, Debug)]
#[command(name = "girder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if girder was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit a machine-readable JSON summary of the pipeline
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new service project with the given name
    #[command(
        name = "new",
        long_about = "Create a new service project with the given name.\n\n\
            Generates the full project skeleton (layered Go source tree, Makefile, \
            env files, GitHub templates), then downloads dependencies, builds mocks, \
            runs the test suite, and initializes a git repository with a first \
            commit. Stages run strictly in order; the first failure aborts the rest.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Scaffold a service named 'orders' (module path defaults to 'orders')
    girder new orders

    # Scaffold with an explicit Go module path
    girder new orders --module github.com/acme/orders

    # Generate files and install dependencies only
    girder new orders --skip-mocks --skip-tests --skip-git"
    )]
    New {
        /// Name of the project (also the directory created for it)
        name: String,

        /// Go module identifier; defaults to the project name
        #[arg(long, value_name = "MODULE")]
        module: Option<String>,

        /// Skip the `make mock` stage
        #[arg(long)]
        skip_mocks: bool,

        /// Skip the `make test` stage
        #[arg(long)]
        skip_tests: bool,

        /// Skip git init / add / commit
        #[arg(long)]
        skip_git: bool,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion scripts.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    /// Bash
    Bash,
    /// Zsh
    Zsh,
    /// Fish
    Fish,
    /// PowerShell
    #[value(name = "powershell")]
    PowerShell,
}
