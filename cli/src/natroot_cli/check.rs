use std::{fs, path::PathBuf, process::exit};

use anyhow::{Context, Result};
use clap::Args;
use log::info;

use natroot::{
  cases::{reference_cases, run_cases},
  parser::CaseParser,
};

use crate::SolverArgs;

#[derive(Debug, Args)]
pub struct CheckCommand {
  /// A case table of `n r expected` lines; the reference table if omitted
  cases: Option<PathBuf>,
  #[command(flatten)]
  solver: SolverArgs,
}

impl CheckCommand {
  pub fn execute(self) -> Result<()> {
    let cases = match &self.cases {
      Some(path) => {
        let src = fs::read_to_string(path)
          .with_context(|| format!("cannot read case table `{}`", path.display()))?;
        let cases = CaseParser::parse(&src)
          .with_context(|| format!("cannot parse case table `{}`", path.display()))?;
        info!("loaded {} cases from `{}`", cases.len(), path.display());
        cases
      }
      None => reference_cases(),
    };

    let report = run_cases(&self.solver.solver(), cases);
    for outcome in &report.outcomes {
      println!("{outcome}");
    }
    println!("\n{} passed; {} failed", report.passed(), report.failed());
    self.solver.report(&report.stats);

    if !report.success() {
      exit(1);
    }
    Ok(())
  }
}
