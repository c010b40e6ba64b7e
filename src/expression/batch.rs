use log::info;
use rayon::prelude::*;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;

/// Evaluate independent trees in parallel, keeping the input order.
pub fn evaluate_batch(expressions: &[Expression]) -> Vec<Result<f64, ExpressionError>> {
    info!("Evaluating batch of {} expressions", expressions.len());

    expressions
        .par_iter()
        .map(Expression::evaluate)
        .collect()
}
