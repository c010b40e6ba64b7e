use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}

/// The capability of yielding a numeric value.
///
/// Callers that only need a value should depend on this trait rather than on
/// [`Expression`] directly.
pub trait Evaluate {
    /// # Errors
    ///
    /// Returns an error when an operation is undefined for its operands.
    fn evaluate(&self) -> Result<f64, ExpressionError>;
}

impl<T: Evaluate + ?Sized> Evaluate for &T {
    fn evaluate(&self) -> Result<f64, ExpressionError> {
        (**self).evaluate()
    }
}

impl<T: Evaluate + ?Sized> Evaluate for Box<T> {
    fn evaluate(&self) -> Result<f64, ExpressionError> {
        (**self).evaluate()
    }
}

/// Outcome of a traced evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// Nodes visited while computing `value`.
    pub visits: usize,
}

impl Expression {
    /// Evaluate the tree bottom-up. Every call walks the whole tree again.
    ///
    /// # Errors
    ///
    /// Returns [`ExpressionError::DivisionByZero`] when a divisor evaluates to zero.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let mut visits = 0;
        self.evaluate_counting(&mut visits)
    }

    /// Evaluate the tree and report how many nodes were visited.
    ///
    /// # Errors
    ///
    /// Same as [`Expression::evaluate`].
    pub fn evaluate_with_stats(&self) -> Result<Evaluation, ExpressionError> {
        let mut visits = 0;
        let value = self.evaluate_counting(&mut visits)?;
        Ok(Evaluation { value, visits })
    }

    fn evaluate_counting(&self, visits: &mut usize) -> Result<f64, ExpressionError> {
        *visits += 1;
        debug!("Evaluating expression: {}", self);

        let result = match self {
            Expression::Number(n) => Ok(*n),
            Expression::Plus(l, r) => {
                let left = l.evaluate_counting(visits)?;
                let right = r.evaluate_counting(visits)?;
                Ok(left + right)
            }
            Expression::Minus(l, r) => {
                let left = l.evaluate_counting(visits)?;
                let right = r.evaluate_counting(visits)?;
                Ok(left - right)
            }
            Expression::Times(l, r) => {
                let left = l.evaluate_counting(visits)?;
                let right = r.evaluate_counting(visits)?;
                Ok(left * right)
            }
            Expression::Divide(l, r) => {
                let left = l.evaluate_counting(visits)?;
                let right = r.evaluate_counting(visits)?;
                if is_zero(right) {
                    debug!("Division by zero attempted: {} / {}", left, right);
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        };

        match &result {
            Ok(value) => debug!("Expression evaluated to: {}", value),
            Err(e) => debug!("Expression evaluation failed: {}", e),
        }

        result
    }
}

impl Evaluate for Expression {
    fn evaluate(&self) -> Result<f64, ExpressionError> {
        Expression::evaluate(self)
    }
}
