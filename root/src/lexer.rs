use std::mem::transmute;

use logos::Logos;
use natroot_util::lexer::Token as TokenTrait;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"#[^\n]*")]
#[repr(u8)]
pub enum Token {
  #[regex(r"[0-9][0-9A-Za-z_]*")]
  Num,
  #[token("\n")]
  Newline,
}

impl TokenTrait for Token {
  fn into_u8(self) -> u8 {
    self as u8
  }

  unsafe fn from_u8(value: u8) -> Self {
    transmute::<u8, Self>(value)
  }

  fn describe(self) -> &'static str {
    match self {
      Token::Num => "a number",
      Token::Newline => "end of line",
    }
  }
}
