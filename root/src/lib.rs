//! Integer roots of arbitrary-precision natural numbers.
//!
//! [`root`] replaces a natural number `n` with the largest `k` such that
//! `k^r <= n`, using a binary search that needs nothing beyond the
//! [`Natural`] operations.

pub mod cases;
pub mod lexer;
pub mod natural;
pub mod parser;
pub mod root;
pub mod stats;

pub use natural::Natural;
pub use root::{root, RootSolver};
pub use stats::Stats;
