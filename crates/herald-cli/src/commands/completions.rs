//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "herald";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    match args.shell {
        Shell::Bash => write_to(shells::Bash, &mut io::stdout()),
        Shell::Zsh => write_to(shells::Zsh, &mut io::stdout()),
        Shell::Fish => write_to(shells::Fish, &mut io::stdout()),
        Shell::PowerShell => write_to(shells::PowerShell, &mut io::stdout()),
        Shell::Elvish => write_to(shells::Elvish, &mut io::stdout()),
    }
    Ok(())
}

fn write_to<G: Generator>(shell: G, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
