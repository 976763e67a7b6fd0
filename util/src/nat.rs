use std::{
  cmp::Ordering,
  fmt::{self, Write},
  mem::take,
  ops::{AddAssign, Mul, SubAssign},
  str::FromStr,
};

use thiserror::Error;

/// An arbitrary-precision natural number.
///
/// Stored as little-endian `u32` limbs with no trailing zero limbs, so two
/// `Nat`s are equal exactly when their limbs are.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Nat(Vec<u32>);

impl Nat {
  pub const ZERO: Nat = Nat(Vec::new());

  pub fn new(mut parts: Vec<u32>) -> Self {
    while parts.last().is_some_and(|x| *x == 0) {
      parts.pop();
    }
    Self(parts)
  }

  pub fn one() -> Self {
    Nat(vec![1])
  }

  pub fn limbs(&self) -> &[u32] {
    &self.0
  }

  pub fn is_zero(&self) -> bool {
    self.0.is_empty()
  }

  pub fn is_one(&self) -> bool {
    self.0 == [1]
  }

  /// The number of significant bits; zero for `Nat::ZERO`.
  pub fn bits(&self) -> u64 {
    match self.0.last() {
      None => 0,
      Some(top) => (self.0.len() as u64 - 1) * 32 + (32 - top.leading_zeros()) as u64,
    }
  }

  fn normalize(&mut self) {
    while self.0.last().is_some_and(|x| *x == 0) {
      self.0.pop();
    }
  }

  pub fn add_u32(&mut self, mut n: u32) {
    for d in &mut self.0 {
      if n == 0 {
        return;
      }
      let (new, carry) = u32::overflowing_add(*d, n);
      *d = new;
      n = carry as u32;
    }
    if n != 0 {
      self.0.push(n);
    }
  }

  pub fn increment(&mut self) {
    self.add_u32(1);
  }

  pub fn mul_u32(&mut self, n: u32) {
    if n == 0 {
      self.0.clear();
      return;
    }
    let mut carry = 0;
    for d in &mut self.0 {
      let total = *d as u64 * n as u64 + carry;
      *d = total as u32;
      carry = total >> 32;
    }
    if carry != 0 {
      self.0.push(carry as u32);
    }
  }

  /// Floor-divides by `divisor` in place, returning the remainder.
  pub fn div_rem_u32(&mut self, divisor: u32) -> u32 {
    assert!(divisor != 0, "division of a natural number by zero");
    let divisor = divisor as u64;
    let mut rem = 0u64;
    for d in self.0.iter_mut().rev() {
      let cur = rem << 32 | *d as u64;
      *d = (cur / divisor) as u32;
      rem = cur % divisor;
    }
    self.normalize();
    rem as u32
  }

  pub fn add_nat(&mut self, other: &Nat) {
    if self.0.len() < other.0.len() {
      self.0.resize(other.0.len(), 0);
    }
    let mut carry = false;
    for (i, d) in self.0.iter_mut().enumerate() {
      let o = match other.0.get(i) {
        Some(&o) => o,
        None if !carry => return,
        None => 0,
      };
      let (sum, c1) = d.overflowing_add(o);
      let (sum, c2) = sum.overflowing_add(carry as u32);
      *d = sum;
      carry = c1 || c2;
    }
    if carry {
      self.0.push(1);
    }
  }

  /// Subtracts `other` in place.
  ///
  /// Panics if `other` is larger than `self`; naturals have no negatives.
  pub fn sub_nat(&mut self, other: &Nat) {
    assert!(*self >= *other, "natural subtraction underflow: {self} - {other}");
    let mut borrow = false;
    for (i, d) in self.0.iter_mut().enumerate() {
      let o = match other.0.get(i) {
        Some(&o) => o,
        None if !borrow => break,
        None => 0,
      };
      let (diff, b1) = d.overflowing_sub(o);
      let (diff, b2) = diff.overflowing_sub(borrow as u32);
      *d = diff;
      borrow = b1 || b2;
    }
    self.normalize();
  }

  /// Raises `self` to the power `exp` in place, by repeated squaring.
  pub fn pow(&mut self, mut exp: u32) {
    let mut base = take(self);
    let mut acc = Nat::one();
    while exp != 0 {
      if exp & 1 == 1 {
        acc = &acc * &base;
      }
      exp >>= 1;
      if exp != 0 {
        base = &base * &base;
      }
    }
    *self = acc;
  }

  pub fn as_u64(&self) -> Option<u64> {
    match self.0[..] {
      [] => Some(0),
      [n] => Some(n as u64),
      [n, m] => Some(n as u64 | (m as u64) << 32),
      _ => None,
    }
  }
}

fn mul_limbs(a: &[u32], b: &[u32]) -> Nat {
  if a.is_empty() || b.is_empty() {
    return Nat::ZERO;
  }
  let mut out = vec![0u32; a.len() + b.len()];
  for (i, &x) in a.iter().enumerate() {
    let mut carry = 0u64;
    for (j, &y) in b.iter().enumerate() {
      // (2^32 - 1)^2 + 2 * (2^32 - 1) == 2^64 - 1, so this cannot overflow
      let total = x as u64 * y as u64 + out[i + j] as u64 + carry;
      out[i + j] = total as u32;
      carry = total >> 32;
    }
    out[i + b.len()] = carry as u32;
  }
  Nat::new(out)
}

impl Ord for Nat {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.len().cmp(&other.0.len()).then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
  }
}

impl PartialOrd for Nat {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl AddAssign<&Nat> for Nat {
  fn add_assign(&mut self, rhs: &Nat) {
    self.add_nat(rhs);
  }
}

impl SubAssign<&Nat> for Nat {
  fn sub_assign(&mut self, rhs: &Nat) {
    self.sub_nat(rhs);
  }
}

impl Mul<&Nat> for &Nat {
  type Output = Nat;

  fn mul(self, rhs: &Nat) -> Nat {
    mul_limbs(&self.0, &rhs.0)
  }
}

impl fmt::Display for Nat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const CHUNK: u32 = 1_000_000_000;
    let mut rest = self.clone();
    let mut chunks = Vec::new();
    while !rest.is_zero() {
      chunks.push(rest.div_rem_u32(CHUNK));
    }
    let mut digits = String::new();
    match chunks.split_last() {
      None => digits.push('0'),
      Some((top, lower)) => {
        write!(digits, "{top}")?;
        for chunk in lower.iter().rev() {
          write!(digits, "{chunk:09}")?;
        }
      }
    }
    f.pad_integral(true, "", &digits)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNatError {
  #[error("cannot parse a natural number from an empty string")]
  Empty,
  #[error("invalid digit `{digit}` in natural number literal `{literal}`")]
  InvalidDigit { digit: char, literal: String },
}

impl FromStr for Nat {
  type Err = ParseNatError;

  /// Parses a plain base-10 digit string.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() {
      return Err(ParseNatError::Empty);
    }
    let mut num = Nat::ZERO;
    for c in s.chars() {
      let digit = c
        .to_digit(10)
        .ok_or_else(|| ParseNatError::InvalidDigit { digit: c, literal: s.to_owned() })?;
      num.mul_u32(10);
      num.add_u32(digit);
    }
    Ok(num)
  }
}

impl From<u32> for Nat {
  fn from(n: u32) -> Nat {
    if n == 0 { Nat::ZERO } else { Nat(vec![n]) }
  }
}

impl From<u64> for Nat {
  fn from(n: u64) -> Nat {
    if n <= u32::MAX as u64 { (n as u32).into() } else { Nat(vec![n as u32, (n >> 32) as u32]) }
  }
}

#[cfg(test)]
mod tests {
  use num_bigint::BigUint;

  use super::*;

  fn nat(s: &str) -> Nat {
    s.parse().unwrap()
  }

  fn big(n: &Nat) -> BigUint {
    BigUint::from_slice(n.limbs())
  }

  #[test]
  fn parse_and_display() {
    for s in ["0", "1", "999999999", "1000000000", "170141183460469231731687303715884105727"] {
      assert_eq!(nat(s).to_string(), s);
    }
    assert_eq!(nat("007").to_string(), "7");
    assert_eq!(format!("{:>5}", nat("42")), "   42");
  }

  #[test]
  fn parse_errors() {
    assert_eq!("".parse::<Nat>(), Err(ParseNatError::Empty));
    assert_eq!(
      "12x4".parse::<Nat>(),
      Err(ParseNatError::InvalidDigit { digit: 'x', literal: "12x4".into() })
    );
    assert!("-1".parse::<Nat>().is_err());
  }

  #[test]
  fn ordering() {
    assert!(nat("4294967296") > nat("4294967295"));
    assert!(nat("0") < nat("1"));
    assert!(nat("18446744073709551616") > nat("18446744073709551615"));
    assert_eq!(nat("123").cmp(&Nat::from(123u32)), Ordering::Equal);
  }

  #[test]
  fn carries_and_borrows() {
    let mut n = Nat::from(u64::MAX);
    n.increment();
    assert_eq!(n.limbs(), [0, 0, 1]);
    n.sub_nat(&Nat::one());
    assert_eq!(n, Nat::from(u64::MAX));

    let mut n = nat("18446744073709551616");
    n -= &nat("18446744073709551616");
    assert!(n.is_zero());
    assert_eq!(n.limbs(), &[] as &[u32]);
  }

  #[test]
  #[should_panic(expected = "underflow")]
  fn sub_underflow_panics() {
    let mut n = nat("5");
    n.sub_nat(&nat("6"));
  }

  #[test]
  fn halving() {
    let mut n = nat("170141183460469231731687303715884105727");
    assert_eq!(n.div_rem_u32(2), 1);
    assert_eq!(n.to_string(), "85070591730234615865843651857942052863");
    let mut n = Nat::one();
    assert_eq!(n.div_rem_u32(2), 1);
    assert!(n.is_zero());
  }

  #[test]
  fn powers() {
    let mut n = nat("2353973");
    n.pow(6);
    assert_eq!(n.to_string(), big(&nat("2353973")).pow(6).to_string());
    let mut n = nat("82");
    n.pow(0);
    assert!(n.is_one());
    let mut n = Nat::ZERO;
    n.pow(3);
    assert!(n.is_zero());
  }

  #[test]
  fn arithmetic_matches_num_bigint() {
    let samples = [
      "0",
      "1",
      "4294967295",
      "4294967296",
      "18446744073709551615",
      "618970019642690137449562111",
      "162259276829213363391578010288127",
    ];
    for a in samples {
      for b in samples {
        let (a, b) = (nat(a), nat(b));
        let mut sum = a.clone();
        sum += &b;
        assert_eq!(big(&sum), big(&a) + big(&b));
        assert_eq!(big(&(&a * &b)), big(&a) * big(&b));
        if a >= b {
          let mut diff = a.clone();
          diff -= &b;
          assert_eq!(big(&diff), big(&a) - big(&b));
        }
        assert_eq!(a.cmp(&b), big(&a).cmp(&big(&b)));
      }
    }
  }

  #[test]
  fn conversions() {
    assert_eq!(Nat::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(Nat::from(1u64 << 32).limbs(), [0, 1]);
    assert_eq!(nat("4294967296").as_u64(), Some(1 << 32));
    assert_eq!(nat("18446744073709551616").as_u64(), None);
    assert_eq!(nat("4294967296").bits(), 33);
    assert_eq!(Nat::ZERO.bits(), 0);
  }
}
