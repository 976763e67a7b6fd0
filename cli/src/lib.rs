mod common;
mod natroot_cli;

pub use common::*;
pub use natroot_cli::*;
