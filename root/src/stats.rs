use std::{
  fmt::{self, Display, Write},
  ops::AddAssign,
  time::Duration,
};

/// Statistics about one or more root searches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
  /// The number of `solve` calls folded into these stats.
  pub calls: u64,
  /// Candidate roots tested; each costs one exponentiation.
  pub iterations: u64,
  /// Searches that stopped early because a candidate was an exact root.
  pub exact_hits: u64,

  /// The widest input, in bits.
  pub input_bits: u64,
  /// The widest root, in bits.
  pub root_bits: u64,
  /// The widest candidate power computed, in bits; a high water mark of
  /// working memory.
  pub power_bits: u64,

  pub time: Duration,
}

impl Stats {
  /// The speed of the search, in iterations per second.
  pub fn speed(&self) -> u64 {
    let secs = self.time.as_secs_f64();
    if secs == 0.0 {
      0
    } else {
      (self.iterations as f64 / secs) as u64
    }
  }
}

impl Display for Stats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let counted = [
      ("Search", None),
      ("  Calls", Some((self.calls, ""))),
      ("  Iterations", Some((self.iterations, ""))),
      ("  Exact", Some((self.exact_hits, ""))),
      ("", None),
      ("Operands", None),
      ("  Input", Some((self.input_bits, "bits"))),
      ("  Root", Some((self.root_bits, "bits"))),
      ("  Power", Some((self.power_bits, "bits"))),
      ("", None),
    ];
    // timing varies from run to run, so it never widens the columns above
    let timed = [
      ("Performance", None),
      ("  Time", Some((self.time.as_micros() as u64, "us"))),
      ("  Speed", Some((self.speed(), "IPS"))),
    ];

    let lines = counted.iter().chain(&timed);
    let max_label_width = lines.clone().map(|x| x.0.len()).max().unwrap_or(0) + 1;
    let max_value =
      counted.iter().filter_map(|x| x.1).map(|x| x.0).max().unwrap_or(0).max(1_000_000_000);
    let max_value_width = measure_int(max_value);

    for &(label, value) in lines {
      f.write_char('\n')?;
      f.write_str(label)?;
      if let Some((value, unit)) = value {
        let digits = group_digits(value);
        let width = max_label_width + 2 + max_value_width;
        let pad = width.saturating_sub(label.len() + digits.len());
        for _ in 0..pad {
          f.write_char(' ')?;
        }
        f.write_str(&digits)?;
        if !unit.is_empty() {
          f.write_char(' ')?;
          f.write_str(unit)?;
        }
      }
    }

    Ok(())
  }
}

/// Renders an integer with `_` between groups of three digits.
fn group_digits(value: u64) -> String {
  let plain = value.to_string();
  let mut grouped = String::with_capacity(measure_int(value));
  for (i, c) in plain.chars().enumerate() {
    if i != 0 && (plain.len() - i) % 3 == 0 {
      grouped.push('_');
    }
    grouped.push(c);
  }
  grouped
}

/// Count the number of characters needed to pretty-print an integer.
const fn measure_int(int: u64) -> usize {
  if int == 0 {
    1
  } else {
    let digits = int.ilog10() + 1;
    (digits + (digits - 1) / 3) as usize
  }
}

impl AddAssign<Stats> for Stats {
  fn add_assign(&mut self, rhs: Stats) {
    self.calls += rhs.calls;
    self.iterations += rhs.iterations;
    self.exact_hits += rhs.exact_hits;
    self.input_bits = self.input_bits.max(rhs.input_bits);
    self.root_bits = self.root_bits.max(rhs.root_bits);
    self.power_bits = self.power_bits.max(rhs.power_bits);
    self.time += rhs.time;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digit_grouping() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1000), "1_000");
    assert_eq!(group_digits(1_234_567), "1_234_567");
    assert_eq!(measure_int(1_234_567), "1_234_567".len());
  }

  #[test]
  fn accumulates() {
    let mut total = Stats::default();
    total += Stats { calls: 1, iterations: 5, input_bits: 10, power_bits: 30, ..Stats::default() };
    total += Stats { calls: 1, iterations: 2, exact_hits: 1, input_bits: 4, ..Stats::default() };
    assert_eq!(total.calls, 2);
    assert_eq!(total.iterations, 7);
    assert_eq!(total.exact_hits, 1);
    assert_eq!(total.input_bits, 10);
    assert_eq!(total.power_bits, 30);
  }

  #[test]
  fn display_aligns_values() {
    let stats = Stats { calls: 1, iterations: 1234, ..Stats::default() };
    let text = stats.to_string();
    let (counted, timed) = text.split_once("\nPerformance").unwrap();
    assert_eq!(
      counted,
      "
Search
  Calls                    1
  Iterations           1_234
  Exact                    0

Operands
  Input                    0 bits
  Root                     0 bits
  Power                    0 bits
"
    );
    assert!(timed.contains("  Time"));
    assert!(timed.contains("  Speed                    0 IPS"));
  }
}
