use anyhow::Result;
use clap::{value_parser, Args};

use natroot_util::nat::Nat;

use crate::SolverArgs;

#[derive(Debug, Args)]
pub struct RootCommand {
  /// The natural number, in decimal
  n: Nat,
  /// The root degree
  #[arg(env = "NATROOT_DEGREE", default_value_t = 2, value_parser = value_parser!(u32).range(2..))]
  r: u32,
  #[command(flatten)]
  solver: SolverArgs,
}

impl RootCommand {
  pub fn execute(self) -> Result<()> {
    let RootCommand { mut n, r, solver } = self;
    let stats = solver.solver().solve(&mut n, r);
    println!("{n}");
    solver.report(&stats);
    Ok(())
  }
}
