use anyhow::Result;
use natroot_cli::NatrootCommand;

fn main() -> Result<()> {
  NatrootCommand::execute()
}
