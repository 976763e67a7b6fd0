use std::{cmp::Ordering, mem::take, time::Instant};

use log::{debug, trace};

use crate::{natural::Natural, stats::Stats};

/// Finds integer roots by binary search over candidate roots.
///
/// The search keeps two bounds, `low_enough` and `too_high`, with
/// `low_enough^r <= n < too_high^r`, and tests their midpoint until the gap
/// between them closes to one. Each iteration costs one exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootSolver {
  /// Stop as soon as a candidate's power equals the input, rather than
  /// narrowing the bounds until the gap closes. Only the iteration count
  /// differs.
  pub stop_on_exact: bool,
}

impl Default for RootSolver {
  fn default() -> Self {
    RootSolver { stop_on_exact: true }
  }
}

impl RootSolver {
  /// A solver that terminates on the closed gap alone.
  pub fn gap_only() -> Self {
    RootSolver { stop_on_exact: false }
  }

  /// Replaces `n` with the largest `k` such that `k^r <= n`.
  ///
  /// Panics if `r < 2`.
  pub fn solve<N: Natural>(&self, n: &mut N, r: u32) -> Stats {
    assert!(r >= 2, "root degree must be at least 2; got {r}");

    let start = Instant::now();
    let mut stats = Stats { calls: 1, input_bits: n.bits(), ..Stats::default() };

    let mut low_enough = N::default();
    let mut too_high = n.clone();
    too_high.increment();

    loop {
      let mut gap = too_high.clone();
      gap.subtract(&low_enough);
      debug_assert!(gap > N::default());
      if gap.is_one() {
        break;
      }

      let mut estimate = too_high.clone();
      estimate.add(&low_enough);
      estimate.halve();

      let mut power = estimate.clone();
      power.power(r);
      stats.iterations += 1;
      stats.power_bits = stats.power_bits.max(power.bits());

      let ordering = power.cmp(n);
      trace!(
        "iteration {}: {}-bit estimate, power is {:?} input",
        stats.iterations,
        estimate.bits(),
        ordering,
      );
      match ordering {
        Ordering::Greater => too_high = estimate,
        Ordering::Equal => {
          low_enough = estimate;
          if self.stop_on_exact {
            stats.exact_hits += 1;
            break;
          }
        }
        Ordering::Less => low_enough = estimate,
      }
    }

    *n = take(&mut low_enough);

    stats.root_bits = n.bits();
    stats.time = start.elapsed();
    debug!(
      "{}-bit input, degree {r}: {}-bit root after {} iterations",
      stats.input_bits, stats.root_bits, stats.iterations,
    );
    stats
  }
}

/// Replaces `n` with its integer `r`-th root: the `k` with
/// `k^r <= n < (k + 1)^r`.
///
/// Panics if `r < 2`.
pub fn root<N: Natural>(n: &mut N, r: u32) {
  RootSolver::default().solve(n, r);
}

#[cfg(test)]
mod tests {
  use natroot_util::nat::Nat;

  use super::*;

  fn nat(s: &str) -> Nat {
    s.parse().unwrap()
  }

  fn root_of(n: &str, r: u32) -> String {
    let mut n = nat(n);
    root(&mut n, r);
    n.to_string()
  }

  #[test]
  fn reference_scenarios() {
    let cases = [
      ("0", 2, "0"),
      ("1", 2, "1"),
      ("13", 2, "3"),
      ("1024", 2, "32"),
      ("189943527", 2, "13782"),
      ("13", 3, "2"),
      ("4096", 3, "16"),
      ("82", 2, "9"),
      ("82", 3, "4"),
      ("82", 4, "3"),
      ("82", 5, "2"),
      ("82", 15, "1"),
      ("2147483647", 2, "46340"),
      ("2147483648", 2, "46340"),
      ("170141183460469231731687303715884105727", 6, "2353973"),
    ];
    for (n, r, expected) in cases {
      assert_eq!(root_of(n, r), expected, "root({n}, {r})");
    }
  }

  #[test]
  fn zero_has_root_zero() {
    for r in 2..20 {
      assert_eq!(root_of("0", r), "0");
    }
  }

  #[test]
  fn small_inputs_bracket_the_root() {
    for r in 2..6u32 {
      for n in 0..2000u64 {
        let mut k = Nat::from(n);
        root(&mut k, r);
        let k = k.as_u64().unwrap();
        assert!(k.pow(r) <= n, "root({n}, {r}) = {k} is too large");
        assert!((k + 1).pow(r) > n, "root({n}, {r}) = {k} is too small");
      }
    }
  }

  #[test]
  fn exact_match_stops_early() {
    let mut n = nat("1024");
    let stats = RootSolver::default().solve(&mut n, 2);
    assert_eq!(n, nat("32"));
    assert_eq!(stats.iterations, 5);
    assert_eq!(stats.exact_hits, 1);

    let mut n = nat("1024");
    let stats = RootSolver::gap_only().solve(&mut n, 2);
    assert_eq!(n, nat("32"));
    assert_eq!(stats.iterations, 10);
    assert_eq!(stats.exact_hits, 0);
  }

  #[test]
  fn stats_describe_the_search() {
    let mut n = nat("170141183460469231731687303715884105727");
    let stats = RootSolver::default().solve(&mut n, 6);
    assert_eq!(stats.calls, 1);
    assert_eq!(stats.iterations, 127);
    assert_eq!(stats.exact_hits, 0);
    assert_eq!(stats.input_bits, 127);
    assert_eq!(stats.root_bits, 22);
    assert_eq!(stats.power_bits, 757);

    let mut n = Nat::ZERO;
    let stats = RootSolver::default().solve(&mut n, 2);
    assert_eq!(stats.iterations, 0);
    assert_eq!(stats.power_bits, 0);
  }

  #[test]
  fn solvers_agree() {
    for n in ["13", "4096", "143489073", "9223372036854775808", "618970019642690137449562111"] {
      for r in 2..8 {
        let mut early = nat(n);
        let mut gap = nat(n);
        RootSolver::default().solve(&mut early, r);
        RootSolver::gap_only().solve(&mut gap, r);
        assert_eq!(early, gap, "root({n}, {r})");
      }
    }
  }

  #[test]
  #[should_panic(expected = "root degree must be at least 2")]
  fn degree_one_is_rejected() {
    root(&mut nat("82"), 1);
  }

  #[test]
  #[should_panic(expected = "root degree must be at least 2")]
  fn degree_zero_is_rejected() {
    root(&mut Nat::ZERO, 0);
  }
}
