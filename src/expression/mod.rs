//! Composite pattern: arithmetic expressions as recursive trees

mod ast;
mod batch;
mod display;
mod errors;
mod eval;
mod latex;

pub use ast::Expression;
pub use batch::evaluate_batch;
pub use errors::ExpressionError;
pub use eval::{Evaluate, Evaluation};

#[cfg(test)]
mod tests;
