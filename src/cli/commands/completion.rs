//! completion command - Shell completion scripts for the girder binary

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells, Generator};

/// Write the completion script for `shell` to stdout.
///
/// The script is derived from the full `girder` command definition,
/// so new flags and subcommands are picked up automatically.
pub fn completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    match shell {
        Shell::Bash => write_script(shells::Bash, &mut cmd),
        Shell::Zsh => write_script(shells::Zsh, &mut cmd),
        Shell::Fish => write_script(shells::Fish, &mut cmd),
        Shell::PowerShell => write_script(shells::PowerShell, &mut cmd),
    }
    Ok(())
}

fn write_script(shell_gen: impl Generator, cmd: &mut clap::Command) {
    let name = cmd.get_name().to_string();
    generate(shell_gen, cmd, name, &mut std::io::stdout());
}
