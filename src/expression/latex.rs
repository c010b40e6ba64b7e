use crate::expression::ast::Expression;

impl Expression {
    /// Render the expression as LaTeX.
    /// - Uses \cdot for multiplication
    /// - Uses \frac for division, which makes its own grouping
    pub fn to_latex(&self) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Plus(_, _) | Expression::Minus(_, _) => 1,
                Expression::Times(_, _) | Expression::Divide(_, _) => 2,
                Expression::Number(_) => 5,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn operand(expr: &Expression, wrap: bool) -> String {
            let s = fmt(expr);
            let negative = matches!(expr, Expression::Number(n) if n.is_sign_negative());
            if wrap || negative { wrap_parens(s) } else { s }
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Number(n) => number_to_string(*n),
                Expression::Plus(l, r) => {
                    format!("{} + {}", fmt(l), operand(r, precedence(r) < 1))
                }
                Expression::Minus(l, r) => {
                    format!("{} - {}", fmt(l), operand(r, precedence(r) <= 1))
                }
                Expression::Times(l, r) => {
                    let ls = if precedence(l) < 2 {
                        wrap_parens(fmt(l))
                    } else {
                        fmt(l)
                    };
                    format!("{} \\cdot {}", ls, operand(r, precedence(r) < 2))
                }
                Expression::Divide(l, r) => {
                    format!("\\frac{{{}}}{{{}}}", fmt(l), fmt(r))
                }
            }
        }

        fn number_to_string(n: f64) -> String {
            if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                // f64 Display already omits a trailing .0
                format!("{}", n)
            }
        }

        fmt(self)
    }
}
