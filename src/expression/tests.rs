use crate::expression::{Evaluate, Expression, ExpressionError, evaluate_batch};

fn sample_tree() -> Expression {
    Expression::plus(
        Expression::plus(Expression::number(1.0), Expression::number(2.0)),
        Expression::number(3.0),
    )
}

#[test]
fn test_leaf_returns_its_value() {
    for v in [0.0, -3.25, 42.0, 1e-12, f64::MAX] {
        let result = Expression::Number(v).evaluate();
        assert_eq!(result, Ok(v));
    }
}

#[test]
fn test_plus_sums_children() {
    let left = Expression::times(Expression::number(2.0), Expression::number(4.5));
    let right = Expression::number(0.25);
    let expected = left.evaluate().unwrap_or(f64::NAN) + right.evaluate().unwrap_or(f64::NAN);

    let expr = Expression::plus(left, right);
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - expected).abs() < 1e-9);
    }
}

#[test]
fn test_nested_plus_equals_six() {
    let result = sample_tree().evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 6.0).abs() < 1e-9);
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let expr = sample_tree();
    let first = expr.evaluate();
    let second = expr.evaluate();
    assert_eq!(first, second);
}

#[test]
fn test_mixed_plus_and_minus() {
    let expr = Expression::plus(
        Expression::number(5.0),
        Expression::minus(Expression::number(3.0), Expression::number(1.0)),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 7.0).abs() < 1e-9);
    }
}

#[test]
fn test_times_and_divide() {
    let expr = Expression::divide(
        Expression::times(Expression::number(3.0), Expression::number(4.0)),
        Expression::number(8.0),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 1.5).abs() < 1e-9);
    }
}

#[test]
fn test_division_by_zero() {
    let expr = Expression::divide(Expression::number(1.0), Expression::number(0.0));
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_division_by_small_number() {
    let expr = Expression::divide(
        Expression::number(1.0),
        Expression::number(f64::EPSILON / 2.0),
    );
    assert!(expr.evaluate().is_err());
}

#[test]
fn test_division_by_zero_propagates_to_root() {
    let expr = Expression::plus(
        Expression::number(1.0),
        Expression::divide(
            Expression::number(1.0),
            Expression::minus(Expression::number(2.0), Expression::number(2.0)),
        ),
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
    assert!(expr.evaluate_with_stats().is_err());
}

#[test]
fn test_each_node_visited_once() {
    let expr = Expression::plus(
        sample_tree(),
        Expression::times(Expression::number(2.0), Expression::number(5.0)),
    );
    assert_eq!(expr.leaf_count(), 5);
    assert_eq!(expr.node_count(), 9);

    let result = expr.evaluate_with_stats();
    assert!(result.is_ok());
    if let Ok(evaluation) = result {
        assert!((evaluation.value - 16.0).abs() < 1e-9);
        assert_eq!(evaluation.visits, expr.node_count());
        assert_eq!(evaluation.visits, 2 * expr.leaf_count() - 1);
    }
}

#[test]
fn test_structure_queries() {
    let leaf = Expression::number(1.0);
    assert!(leaf.is_leaf());
    assert!(leaf.children().is_none());
    assert_eq!(leaf.depth(), 1);

    let tree = sample_tree();
    assert!(!tree.is_leaf());
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.leaf_count(), 3);
    if let Some((left, right)) = tree.children() {
        assert_eq!(left.depth(), 2);
        assert_eq!(*right, Expression::Number(3.0));
    }
}

#[test]
fn test_generic_callers_use_capability() {
    fn total<E: Evaluate>(items: &[E]) -> Result<f64, ExpressionError> {
        items.iter().map(|e| e.evaluate()).sum()
    }

    let items = vec![sample_tree(), Expression::from(4.0)];
    assert_eq!(total(&items), Ok(10.0));

    let boxed: Vec<Box<dyn Evaluate>> =
        vec![Box::new(sample_tree()), Box::new(Expression::from(1.0))];
    assert_eq!(total(&boxed), Ok(7.0));
}

#[test]
fn test_evaluate_batch_keeps_order() {
    let exprs: Vec<Expression> = (0..64)
        .map(|i| Expression::plus(Expression::number(i as f64), Expression::number(1.0)))
        .chain(std::iter::once(Expression::divide(
            Expression::number(1.0),
            Expression::number(0.0),
        )))
        .collect();

    let results = evaluate_batch(&exprs);
    assert_eq!(results.len(), 65);
    for (i, result) in results.iter().take(64).enumerate() {
        assert_eq!(*result, Ok(i as f64 + 1.0));
    }
    assert_eq!(results.last(), Some(&Err(ExpressionError::DivisionByZero)));
}

#[test]
fn test_tree_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();

    let expr = sample_tree();
    let values: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| expr.evaluate())).collect();
        handles.into_iter().filter_map(|h| h.join().ok()).collect()
    });
    assert_eq!(values, vec![Ok(6.0); 4]);
}

#[test]
fn test_display_left_associative_plus() {
    assert_eq!(format!("{}", sample_tree()), "1 + 2 + 3");
}

#[test]
fn test_display_parenthesizes_by_precedence() {
    let grouped = Expression::times(
        Expression::plus(Expression::number(1.0), Expression::number(2.0)),
        Expression::number(3.0),
    );
    assert_eq!(format!("{}", grouped), "(1 + 2) * 3");

    let right_minus = Expression::minus(
        Expression::number(5.0),
        Expression::minus(Expression::number(3.0), Expression::number(1.0)),
    );
    assert_eq!(format!("{}", right_minus), "5 - (3 - 1)");

    let right_div = Expression::divide(
        Expression::number(8.0),
        Expression::times(Expression::number(2.0), Expression::number(2.0)),
    );
    assert_eq!(format!("{}", right_div), "8 / (2 * 2)");
}

#[test]
fn test_display_negative_right_operand() {
    let expr = Expression::plus(Expression::number(1.0), Expression::number(-2.0));
    assert_eq!(format!("{}", expr), "1 + (-2)");

    let leading = Expression::times(Expression::number(-2.0), Expression::number(3.5));
    assert_eq!(format!("{}", leading), "-2 * 3.5");
}

#[test]
fn test_to_latex() {
    let frac = Expression::divide(
        Expression::number(1.0),
        Expression::plus(Expression::number(1.0), Expression::number(2.0)),
    );
    assert_eq!(frac.to_latex(), "\\frac{1}{1 + 2}");

    let product = Expression::times(
        Expression::plus(Expression::number(1.0), Expression::number(2.0)),
        Expression::number(3.0),
    );
    assert_eq!(product.to_latex(), "\\left(1 + 2\\right) \\cdot 3");

    assert_eq!(Expression::number(2.5).to_latex(), "2.5");
    assert_eq!(Expression::number(f64::INFINITY).to_latex(), "\\infty");
}

#[test]
fn test_display_plus_of_minus_needs_no_parens() {
    let expr = Expression::plus(
        Expression::number(5.0),
        Expression::minus(Expression::number(3.0), Expression::number(1.0)),
    );
    assert_eq!(format!("{}", expr), "5 + 3 - 1");
}

#[test]
fn test_to_latex_large_whole_number() {
    assert_eq!(Expression::number(1e40).to_latex(), format!("{}", 1e40));
    assert_eq!(Expression::number(-3.0).to_latex(), "-3");
    assert_eq!(Expression::number(f64::NAN).to_latex(), "\\mathrm{NaN}");
}

#[test]
fn test_negative_zero_right_operand_is_wrapped() {
    let expr = Expression::minus(Expression::number(1.0), Expression::number(-0.0));
    assert_eq!(format!("{}", expr), "1 - (-0)");
    assert_eq!(expr.to_latex(), "1 - \\left(-0\\right)");

    let positive = Expression::minus(Expression::number(1.0), Expression::number(0.0));
    assert_eq!(format!("{}", positive), "1 - 0");
    assert_eq!(positive.to_latex(), "1 - 0");
}
