//! Design patterns - classic object-oriented design patterns in Rust
//!
//! Each pattern is a small, self-contained module. The Composite pattern's
//! expression tree is the centrepiece; the rest show the same idea of
//! dispatching over a small, fixed set of types.

pub mod creational;
pub mod demos;
pub mod expression;
pub mod showroom;
pub mod structural;

// Re-export the main public API
pub use demos::{Demo, DemoError, run_demo};
pub use expression::{Evaluate, Evaluation, Expression, ExpressionError, evaluate_batch};
pub use showroom::{FactoryRegistry, ShowroomError};

/// Evaluate a tree through the [`Evaluate`] capability.
///
/// Works for [`Expression`] and for any other type that can yield a value,
/// so callers never need to know which concrete node they hold.
///
/// # Errors
///
/// This function will return an error if:
/// * A divisor anywhere in the tree evaluates to zero
///
/// # Examples
///
/// ```
/// use design_patterns::{Expression, evaluate};
///
/// // (1 + 2) + 3
/// let expr = Expression::plus(
///     Expression::plus(Expression::number(1.0), Expression::number(2.0)),
///     Expression::number(3.0),
/// );
/// match evaluate(&expr) {
///     Ok(value) => assert_eq!(value, 6.0),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate(node: &impl Evaluate) -> Result<f64, ExpressionError> {
    node.evaluate()
}
