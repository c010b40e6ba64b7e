use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Plus(_, _) | Expression::Minus(_, _) => 1,
                Expression::Times(_, _) | Expression::Divide(_, _) => 2,
                Expression::Number(_) => 5,
            }
        }

        fn is_negative_literal(expr: &Expression) -> bool {
            matches!(expr, Expression::Number(n) if n.is_sign_negative())
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn write_binary(
            f: &mut fmt::Formatter,
            l: &Expression,
            r: &Expression,
            symbol: &str,
            need_l: bool,
            need_r: bool,
        ) -> fmt::Result {
            write_with_parens(f, l, need_l)?;
            write!(f, " {} ", symbol)?;
            // "1 - -2" reads badly, so a negative right literal is always wrapped
            write_with_parens(f, r, need_r || is_negative_literal(r))
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Number(n) => write!(f, "{}", n),
                Expression::Plus(l, r) => {
                    let need_l = precedence(l) < 1;
                    let need_r = precedence(r) < 1;
                    write_binary(f, l, r, "+", need_l, need_r)
                }
                Expression::Minus(l, r) => {
                    let need_l = precedence(l) < 1;
                    let need_r = precedence(r) <= 1;
                    write_binary(f, l, r, "-", need_l, need_r)
                }
                Expression::Times(l, r) => {
                    let need_l = precedence(l) < 2;
                    let need_r = precedence(r) < 2;
                    write_binary(f, l, r, "*", need_l, need_r)
                }
                Expression::Divide(l, r) => {
                    let need_l = precedence(l) < 2;
                    let need_r = precedence(r) <= 2;
                    write_binary(f, l, r, "/", need_l, need_r)
                }
            }
        }

        fmt_expression(f, self)
    }
}
