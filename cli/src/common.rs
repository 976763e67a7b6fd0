use clap::Args;
use env_logger::{Builder, Env};

use natroot::{RootSolver, Stats};

#[derive(Debug, Default, Clone, Args)]
pub struct SolverArgs {
  /// Keep narrowing after finding an exact root instead of stopping early
  #[arg(long)]
  gap_only: bool,
  /// Print search statistics to stderr
  #[arg(long)]
  stats: bool,
}

impl SolverArgs {
  pub fn solver(&self) -> RootSolver {
    if self.gap_only {
      RootSolver::gap_only()
    } else {
      RootSolver::default()
    }
  }

  pub fn report(&self, stats: &Stats) {
    if self.stats {
      eprintln!("{}", stats);
    }
  }
}

/// Logs go to stderr, filtered by `NATROOT_LOG` (default `warn`).
pub fn init_logging() {
  Builder::from_env(Env::default().filter_or("NATROOT_LOG", "warn"))
    .format_timestamp(None)
    .init();
}
