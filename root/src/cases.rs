use std::fmt::{self, Display};

use log::debug;
use natroot_util::nat::Nat;

use crate::{parser::CaseParser, root::RootSolver, stats::Stats};

/// The reference table of root cases, in case-table syntax.
pub const REFERENCE_CASES: &str = include_str!("../cases/reference.cases");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
  pub n: Nat,
  pub r: u32,
  pub expected: Nat,
}

pub fn reference_cases() -> Vec<Case> {
  CaseParser::parse(REFERENCE_CASES).expect("reference case table is well-formed")
}

#[derive(Debug, Clone)]
pub struct Outcome {
  /// 1-based position of the case in its table.
  pub number: usize,
  pub case: Case,
  pub actual: Nat,
}

impl Outcome {
  pub fn passed(&self) -> bool {
    self.actual == self.case.expected
  }
}

impl Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Outcome { number, case: Case { n, r, expected }, actual } = self;
    if self.passed() {
      write!(f, "Test {number} passed: root({n}, {r}) = {expected}")
    } else {
      write!(f, "*** Test {number} failed: root({n}, {r}) expected <{expected}> but was <{actual}>")
    }
  }
}

#[derive(Debug, Default)]
pub struct Report {
  pub outcomes: Vec<Outcome>,
  pub stats: Stats,
}

impl Report {
  pub fn passed(&self) -> usize {
    self.outcomes.iter().filter(|x| x.passed()).count()
  }

  pub fn failed(&self) -> usize {
    self.outcomes.len() - self.passed()
  }

  pub fn success(&self) -> bool {
    self.failed() == 0
  }
}

pub fn run_cases(solver: &RootSolver, cases: Vec<Case>) -> Report {
  let mut report = Report::default();
  for (i, case) in cases.into_iter().enumerate() {
    let mut actual = case.n.clone();
    report.stats += solver.solve(&mut actual, case.r);
    let outcome = Outcome { number: i + 1, case, actual };
    if !outcome.passed() {
      debug!("case {} failed: {outcome}", outcome.number);
    }
    report.outcomes.push(outcome);
  }
  report
}
