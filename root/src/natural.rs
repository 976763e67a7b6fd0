use natroot_util::nat::Nat;

/// The arithmetic a root search needs from a natural-number type.
///
/// A fresh zero comes from `Default`, copies from `Clone`, and comparison
/// from `Ord`; moving a value out is `mem::take`.
pub trait Natural: Clone + Default + Ord {
  fn increment(&mut self);

  fn add(&mut self, other: &Self);

  /// Panics if `other` is larger than `self`.
  fn subtract(&mut self, other: &Self);

  /// Floor division by two.
  fn halve(&mut self);

  fn power(&mut self, exp: u32);

  fn is_one(&self) -> bool;

  fn bits(&self) -> u64;
}

impl Natural for Nat {
  fn increment(&mut self) {
    Nat::increment(self);
  }

  fn add(&mut self, other: &Self) {
    self.add_nat(other);
  }

  fn subtract(&mut self, other: &Self) {
    self.sub_nat(other);
  }

  fn halve(&mut self) {
    self.div_rem_u32(2);
  }

  fn power(&mut self, exp: u32) {
    self.pow(exp);
  }

  fn is_one(&self) -> bool {
    Nat::is_one(self)
  }

  fn bits(&self) -> u64 {
    Nat::bits(self)
  }
}

#[cfg(feature = "num-bigint")]
mod biguint {
  use num_bigint::BigUint;

  use super::Natural;

  impl Natural for BigUint {
    fn increment(&mut self) {
      *self += 1u32;
    }

    fn add(&mut self, other: &Self) {
      *self += other;
    }

    fn subtract(&mut self, other: &Self) {
      *self -= other;
    }

    fn halve(&mut self) {
      *self >>= 1usize;
    }

    fn power(&mut self, exp: u32) {
      *self = BigUint::pow(self, exp);
    }

    fn is_one(&self) -> bool {
      BigUint::bits(self) == 1
    }

    fn bits(&self) -> u64 {
      BigUint::bits(self)
    }
  }

}
