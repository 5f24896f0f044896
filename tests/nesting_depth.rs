//! Rendering of deeply nested trees.
//!
//! Boolean chains built by a parser nest one level per operator, so a long
//! `OR` chain is the deepest tree in practice. Rendering such a tree fails
//! with a dedicated error and dropping it never exhausts the stack.

use metasequoia_ast::{ComputeOperator, Dialect, Error, Expression, Render, RenderOptions, dialect};

fn or_chain(depth: usize) -> Expression {
    let mut expression = Expression::column("c0");
    for i in 1..depth {
        expression = Expression::or(expression, Expression::column(format!("c{i}")));
    }
    expression
}

#[test]
fn test_moderate_depth_renders() {
    let sql = or_chain(100).render(Dialect::MySql).unwrap();
    assert!(sql.starts_with("`c0` OR `c1` OR"));
    assert_eq!(sql.matches(" OR ").count(), 99);
}

#[test]
fn test_default_bound() {
    assert_eq!(
        or_chain(300).render(Dialect::MySql),
        Err(Error::NestingTooDeep {
            limit: dialect::DEFAULT_MAX_DEPTH
        })
    );
}

#[test]
fn test_configured_bound() {
    let options = RenderOptions::new(Dialect::Hive).with_max_depth(10);
    assert_eq!(
        or_chain(20).render_with(&options),
        Err(Error::NestingTooDeep { limit: 10 })
    );
    assert!(or_chain(5).render_with(&options).is_ok());
}

#[test]
fn test_very_long_chain_is_rejected_and_released() {
    let chain = or_chain(200_000);
    assert_eq!(chain.depth(), 200_000);
    assert_eq!(
        chain.render(Dialect::Default),
        Err(Error::NestingTooDeep {
            limit: dialect::DEFAULT_MAX_DEPTH
        })
    );
    drop(chain);
}

#[test]
fn test_deep_mixed_tree_is_released() {
    let mut expression = Expression::column("x");
    for i in 0..150_000 {
        expression = match i % 3 {
            0 => Expression::not(expression),
            1 => Expression::compute(
                expression,
                ComputeOperator::Plus,
                Expression::literal("1"),
            ),
            _ => Expression::and(Expression::column("y"), expression),
        };
    }
    assert_eq!(expression.depth(), 150_001);
    drop(expression);
}
