use anyhow::{ensure, Context, Result};
use clap::Args;
use rustyline::{error::ReadlineError, DefaultEditor};

use natroot_util::nat::Nat;

use crate::SolverArgs;

#[derive(Debug, Args)]
pub struct ReplCommand {
  /// Echo each input line before its result
  #[arg(long)]
  echo: bool,
  #[command(flatten)]
  solver: SolverArgs,
}

impl ReplCommand {
  pub fn execute(self) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    loop {
      let line = match editor.readline("> ") {
        Ok(line) => line,
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
        Err(err) => return Err(err.into()),
      };
      let line = line.trim();
      if line.is_empty() {
        continue;
      }
      _ = editor.add_history_entry(line);
      if self.echo {
        println!("> {line}");
      }
      match self.eval(line) {
        Ok(root) => println!("{root}"),
        Err(err) => eprintln!("error: {err:#}"),
      }
    }
    Ok(())
  }

  fn eval(&self, line: &str) -> Result<Nat> {
    let (mut n, r) = parse_line(line)?;
    let stats = self.solver.solver().solve(&mut n, r);
    self.solver.report(&stats);
    Ok(n)
  }
}

/// Parses `N [R]`, with `R` defaulting to 2.
fn parse_line(line: &str) -> Result<(Nat, u32)> {
  let mut words = line.split_whitespace();
  let n = words.next().context("expected a number")?;
  let n = n.parse::<Nat>()?;
  let r = match words.next() {
    Some(r) => r.parse::<u32>().with_context(|| format!("invalid root degree `{r}`"))?,
    None => 2,
  };
  ensure!(r >= 2, "root degree must be at least 2; got {r}");
  ensure!(words.next().is_none(), "expected `N [R]`; found extra input");
  Ok((n, r))
}
