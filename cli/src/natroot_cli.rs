mod check;
mod completion;
mod repl;
mod root;

use anyhow::Result;
use clap::Parser;

pub use check::CheckCommand;
pub use completion::CompletionCommand;
pub use repl::ReplCommand;
pub use root::RootCommand;

use crate::init_logging;

#[derive(Debug, Parser)]
#[command(
  name = "natroot",
  version,
  about = "Integer roots of arbitrary-precision natural numbers",
  propagate_version = true
)]
pub enum NatrootCommand {
  #[command(about = "Print the integer root of a natural number")]
  Root(RootCommand),
  #[command(about = "Run a table of root cases and report each result")]
  Check(CheckCommand),
  #[command(about = "Compute roots interactively, one `N [R]` per line")]
  Repl(ReplCommand),
  #[command(about = "Generate shell completions")]
  Completion(CompletionCommand),
}

impl NatrootCommand {
  pub fn execute() -> Result<()> {
    init_logging();
    match Self::parse() {
      NatrootCommand::Root(root) => root.execute(),
      NatrootCommand::Check(check) => check.execute(),
      NatrootCommand::Repl(repl) => repl.execute(),
      NatrootCommand::Completion(completion) => completion.execute(),
    }
  }
}
