use natroot_util::{
  lexer::TokenSet,
  nat::Nat,
  parser::{Parser, ParserState},
};
use thiserror::Error;

use crate::{cases::Case, lexer::Token};

/// Parses case tables: one `n r expected` triple per line, `#` comments.
pub struct CaseParser<'src> {
  state: ParserState<'src, Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("unrecognized input `{found}` at line {line}")]
  LexError { found: String, line: usize },
  #[error("expected {expected}; found {found} at line {line}")]
  UnexpectedToken { expected: TokenSet<Token>, found: String, line: usize },
  #[error("invalid number `{literal}` at line {line}")]
  InvalidNum { literal: String, line: usize },
  #[error("root degree must be an integer from 2 to {max}; found `{literal}` at line {line}", max = u32::MAX)]
  InvalidDegree { literal: String, line: usize },
}

type Parse<T = ()> = Result<T, ParseError>;

impl<'src> Parser<'src> for CaseParser<'src> {
  type Token = Token;
  type Error = ParseError;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token> {
    &mut self.state
  }

  fn lex_error(&self) -> ParseError {
    ParseError::LexError { found: self.state.lexer.slice().to_owned(), line: self.line() }
  }

  fn unexpected_error(&self) -> ParseError {
    let found = match self.state.token {
      None => "end of input".to_owned(),
      Some(Token::Newline) => "end of line".to_owned(),
      Some(Token::Num) => format!("`{}`", self.state.lexer.slice()),
    };
    ParseError::UnexpectedToken { expected: self.state.expected, found, line: self.line() }
  }
}

impl<'src> CaseParser<'src> {
  pub fn parse(src: &'src str) -> Parse<Vec<Case>> {
    let mut parser = CaseParser { state: ParserState::new(src) };
    parser.bump()?;
    let mut cases = Vec::new();
    while parser.state.token.is_some() {
      if parser.eat(Token::Newline)? {
        continue;
      }
      cases.push(parser.parse_case()?);
      if parser.state.token.is_some() {
        parser.expect(Token::Newline)?;
      }
    }
    Ok(cases)
  }

  fn line(&self) -> usize {
    self.state.position().0
  }

  fn parse_case(&mut self) -> Parse<Case> {
    let n = self.parse_nat()?;
    let r = self.parse_degree()?;
    let expected = self.parse_nat()?;
    Ok(Case { n, r, expected })
  }

  fn parse_nat(&mut self) -> Parse<Nat> {
    let line = self.line();
    let token = self.expect(Token::Num)?;
    self.parse_nat_literal(token, |literal| ParseError::InvalidNum { literal: literal.to_owned(), line })
  }

  fn parse_degree(&mut self) -> Parse<u32> {
    let line = self.line();
    let token = self.expect(Token::Num)?;
    let err = |literal: &str| ParseError::InvalidDegree { literal: literal.to_owned(), line };
    let r = self.parse_u32_literal(token, err)?;
    if r < 2 {
      return Err(err(token));
    }
    Ok(r)
  }
}
