use std::{
  fmt::{self, Debug, Display},
  marker::PhantomData,
};

use logos::Logos;

pub trait Token: for<'src> Logos<'src, Source = str, Extras = ()> + Copy + Eq + Debug {
  fn into_u8(self) -> u8;
  /// ## Safety
  /// `value` was returned by `Self::into_u8`
  unsafe fn from_u8(value: u8) -> Self;
  /// How the token is named in diagnostics, e.g. "a number".
  fn describe(self) -> &'static str;
}

/// A set of tokens, used to record what the parser would have accepted at
/// the current position.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet<T: Token>(u128, PhantomData<T>);

impl<T: Token> Default for TokenSet<T> {
  fn default() -> Self {
    Self(0, PhantomData)
  }
}

impl<T: Token> TokenSet<T> {
  pub fn reset(&mut self) {
    self.0 = 0;
  }

  pub fn add(&mut self, kind: T) {
    self.0 |= 1 << kind.into_u8();
  }

  pub fn contains(&self, kind: T) -> bool {
    self.0 & 1 << kind.into_u8() != 0
  }

  pub fn is_empty(&self) -> bool {
    self.0 == 0
  }
}

impl<T: Token> IntoIterator for TokenSet<T> {
  type Item = T;
  type IntoIter = TokenSetIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    TokenSetIter(self.0, PhantomData)
  }
}

#[derive(Clone, Copy)]
pub struct TokenSetIter<T: Token>(u128, PhantomData<T>);

impl<T: Token> Iterator for TokenSetIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.0 == 0 {
      None
    } else {
      let x = self.0.trailing_zeros() as u8;
      self.0 ^= 1 << x;
      Some(unsafe { T::from_u8(x) })
    }
  }
}

impl<T: Token> Debug for TokenSet<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(*self).finish()
  }
}

impl<T: Token> Display for TokenSet<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, token) in self.into_iter().enumerate() {
      if i != 0 {
        f.write_str(" or ")?;
      }
      f.write_str(token.describe())?;
    }
    Ok(())
  }
}
