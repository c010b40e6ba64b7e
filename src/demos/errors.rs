use thiserror::Error;

use crate::expression::ExpressionError;
use crate::showroom::ShowroomError;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Showroom error: {0}")]
    ShowroomError(#[from] ShowroomError),
}
