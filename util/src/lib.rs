pub mod lexer;
pub mod nat;
pub mod parser;
