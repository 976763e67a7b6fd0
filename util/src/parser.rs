use logos::{Lexer, Logos};

use crate::{
  lexer::{Token, TokenSet},
  nat::Nat,
};

pub struct ParserState<'src, T: Token> {
  pub lexer: Lexer<'src, T>,
  pub token: Option<T>,
  pub last_token_end: usize,
  pub expected: TokenSet<T>,
}

impl<'src, T: Token> ParserState<'src, T> {
  pub fn new(src: &'src str) -> Self {
    ParserState { lexer: T::lexer(src), token: None, last_token_end: 0, expected: TokenSet::default() }
  }

  /// The 1-based line and column of the current token.
  pub fn position(&self) -> (usize, usize) {
    line_col(self.lexer.source(), self.lexer.span().start)
  }
}

pub fn line_col(src: &str, offset: usize) -> (usize, usize) {
  let before = &src[..offset.min(src.len())];
  let line = before.matches('\n').count() + 1;
  let col = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1) + 1;
  (line, col)
}

pub trait Parser<'src> {
  type Token: Token;
  type Error;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token>;

  fn lex_error(&self) -> Self::Error;

  fn unexpected_error(&self) -> Self::Error;

  fn bump(&mut self) -> Result<(), Self::Error> {
    let next = {
      let state = self.state();
      state.expected.reset();
      state.last_token_end = state.lexer.span().end;
      state.lexer.next()
    };
    let token = match next {
      Some(Ok(token)) => Some(token),
      Some(Err(_)) => return Err(self.lex_error()),
      None => None,
    };
    self.state().token = token;
    Ok(())
  }

  fn check(&mut self, kind: Self::Token) -> bool {
    self.state().expected.add(kind);
    self.state().token == Some(kind)
  }

  fn eat(&mut self, kind: Self::Token) -> Result<bool, Self::Error> {
    let matches = self.check(kind);
    if matches {
      self.bump()?;
    }
    Ok(matches)
  }

  fn expect(&mut self, kind: Self::Token) -> Result<&'src str, Self::Error> {
    if self.check(kind) {
      let token = self.state().lexer.slice();
      self.bump()?;
      Ok(token)
    } else {
      self.unexpected()
    }
  }

  fn unexpected<T>(&self) -> Result<T, Self::Error> {
    Err(self.unexpected_error())
  }

  /// Parses a plain base-10 literal that must fit in a `u32`.
  fn parse_u32_literal(
    &mut self,
    token: &'src str,
    err: impl Fn(&'src str) -> Self::Error,
  ) -> Result<u32, Self::Error> {
    let mut num = 0u32;
    for byte in token.bytes() {
      let digit = (byte as char).to_digit(10).ok_or_else(|| err(token))?;
      num = num.checked_mul(10).and_then(|x| x.checked_add(digit)).ok_or_else(|| err(token))?;
    }
    Ok(num)
  }

  /// Parses a plain base-10 literal of any size.
  fn parse_nat_literal(
    &mut self,
    token: &'src str,
    err: impl Fn(&'src str) -> Self::Error,
  ) -> Result<Nat, Self::Error> {
    token.parse::<Nat>().map_err(|_| err(token))
  }
}
