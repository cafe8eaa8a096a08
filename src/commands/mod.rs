//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::evaluate_pair;
pub use simple::{LinePresenter, run_simple};
