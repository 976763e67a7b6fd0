use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::NatrootCommand;

#[derive(Debug, Args)]
pub struct CompletionCommand {
  #[arg(value_enum)]
  shell: Shell,
}

impl CompletionCommand {
  pub fn execute(self) -> Result<()> {
    generate(self.shell, &mut NatrootCommand::command(), "natroot", &mut io::stdout());
    Ok(())
  }
}
