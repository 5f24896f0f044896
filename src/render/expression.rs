//! Rendering of expression nodes.
//!
//! Every expression level goes through [`SqlWriter::nested`], so the nesting
//! bound is enforced on the way down and a pathological tree fails cleanly.

use super::{Render, SqlWriter};
use crate::ast::expression::{
    AggregateFunction, PrecedenceTier, BetweenExpression, CaseConditionExpression, CaseValueExpression, CaseWhen,
    CastFunction, ColumnName, ComparisonExpression, ComputeExpression, ConditionKeyword,
    ExistsExpression, Expression, ExtractFunction, Function, IndexExpression,
    KeywordConditionExpression, LogicalExpression, NormalFunction, SubQuery, SubValue,
    UnaryExpression, WindowBound, WindowExpression, WindowFrame, Wildcard,
};
use crate::ast::literal::Literal;
use crate::catalog::LogicalOperator;
use crate::dialect::Dialect;
use crate::errors::Error;

/// DB2 spells the date and time pseudo-columns with a space.
fn pseudo_column_spelling(column: &str, dialect: Dialect) -> &str {
    if dialect != Dialect::Db2 {
        return column;
    }
    match column {
        "CURRENT_DATE" => "CURRENT DATE",
        "CURRENT_TIME" => "CURRENT TIME",
        "CURRENT_TIMESTAMP" => "CURRENT TIMESTAMP",
        other => other,
    }
}

/// Renders `child` as an operand of an operator in tier `parent`.
///
/// Operands may only come from the same tier or a tighter one; anything
/// looser would read back as a different tree.
fn operand(
    w: &mut SqlWriter<'_>,
    parent: PrecedenceTier,
    child: &Expression,
) -> Result<(), Error> {
    let tier = child.tier();
    if tier > parent {
        log::debug!("Rejecting a {tier} operand under a {parent} operator");
        return Err(Error::PrecedenceViolation {
            parent,
            child: tier,
        });
    }
    w.node(child)
}

impl Render for ColumnName {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        if let Some(table) = &self.table {
            w.push('`');
            w.push_str(table);
            w.push_str("`.");
        }
        if self.is_pseudo_column() {
            w.push_str(pseudo_column_spelling(&self.column, w.dialect()));
        } else {
            w.push('`');
            w.push_str(&self.column);
            w.push('`');
        }
        Ok(())
    }
}

impl Render for Literal {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(&self.text);
        Ok(())
    }
}

impl Render for Wildcard {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        if let Some(table) = &self.table {
            w.push_str(table);
            w.push('.');
        }
        w.push('*');
        Ok(())
    }
}

impl Render for NormalFunction {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.node(&self.name)?;
        w.push('(');
        w.list(&self.params, ", ")?;
        w.push(')');
        Ok(())
    }
}

impl Render for AggregateFunction {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.node(&self.name)?;
        w.push('(');
        if self.distinct {
            w.push_str("DISTINCT ");
        }
        w.list(&self.params, ", ")?;
        w.push(')');
        Ok(())
    }
}

impl Render for CastFunction {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("CAST(");
        w.node(&self.expression)?;
        w.push_str(" AS ");
        w.node(&self.cast_type)?;
        w.push(')');
        Ok(())
    }
}

impl Render for ExtractFunction {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("EXTRACT(");
        w.node(&self.unit)?;
        w.push_str(" FROM ");
        w.node(&self.expression)?;
        w.push(')');
        Ok(())
    }
}

impl Render for Function {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            Function::Normal(function) => w.node(function),
            Function::Aggregate(function) => w.node(function),
            Function::Cast(function) => w.node(function),
            Function::Extract(function) => w.node(function),
        }
    }
}

impl Render for WindowBound {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            WindowBound::UnboundedPreceding | WindowBound::UnboundedFollowing => {
                w.push_str("UNBOUNDED ");
            }
            WindowBound::Preceding(rows) | WindowBound::Following(rows) => {
                w.push_display(rows);
                w.push(' ');
            }
            WindowBound::CurrentRow => {}
        }
        w.keyword(self.row_type())
    }
}

impl Render for WindowFrame {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("ROWS BETWEEN ");
        w.node(&self.from)?;
        w.push_str(" AND ");
        w.node(&self.to)
    }
}

impl Render for WindowExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.node(&self.function)?;
        w.push_str(" OVER (");
        let mut first = true;
        let mut separate = |w: &mut SqlWriter<'_>| {
            if !first {
                w.push(' ');
            }
            first = false;
        };
        if !self.partition_by.is_empty() {
            separate(w);
            w.push_str("PARTITION BY ");
            w.list(&self.partition_by, ", ")?;
        }
        if !self.order_by.is_empty() {
            separate(w);
            w.push_str("ORDER BY ");
            w.list(&self.order_by, ", ")?;
        }
        if let Some(frame) = &self.frame {
            separate(w);
            w.node(frame)?;
        }
        w.push(')');
        Ok(())
    }
}

impl Render for CaseWhen {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("WHEN ");
        w.node(&self.when)?;
        w.push_str(" THEN ");
        w.node(&self.then)
    }
}

impl Render for CaseConditionExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("CASE");
        for case in &self.cases {
            w.push(' ');
            w.node(case)?;
        }
        if let Some(else_value) = &self.else_value {
            w.push_str(" ELSE ");
            w.node(else_value)?;
        }
        w.push_str(" END");
        Ok(())
    }
}

impl Render for CaseValueExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("CASE ");
        w.node(&self.value)?;
        for case in &self.cases {
            w.push_str("\n    ");
            w.node(case)?;
        }
        if let Some(else_value) = &self.else_value {
            w.push_str("\n    ELSE ");
            w.node(else_value)?;
        }
        w.push_str("\nEND");
        Ok(())
    }
}

impl Render for SubQuery {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push('(');
        w.node(&self.statement)?;
        w.push(')');
        Ok(())
    }
}

impl Render for SubValue {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push('(');
        w.list(&self.values, ", ")?;
        w.push(')');
        Ok(())
    }
}

impl Render for IndexExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        if w.dialect() != Dialect::Hive {
            return Err(w.unsupported("array subscript"));
        }
        w.node(&self.array)?;
        w.push('[');
        w.node(&self.index)?;
        w.push(']');
        Ok(())
    }
}

impl Render for UnaryExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.keyword(self.operator)?;
        operand(w, PrecedenceTier::Unary, &self.expression)
    }
}

impl Render for ComputeExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        operand(w, PrecedenceTier::Compute, &self.left)?;
        w.push(' ');
        w.keyword(self.operator)?;
        w.push(' ');
        operand(w, PrecedenceTier::Compute, &self.right)
    }
}

impl Render for KeywordConditionExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        operand(w, PrecedenceTier::KeywordCondition, &self.left)?;
        w.push(' ');
        match (self.keyword, self.negated) {
            (ConditionKeyword::Is, true) => w.push_str("IS NOT"),
            (keyword, true) => {
                w.push_str("NOT ");
                w.push_str(keyword.as_str());
            }
            (keyword, false) => w.push_str(keyword.as_str()),
        }
        w.push(' ');
        operand(w, PrecedenceTier::KeywordCondition, &self.right)
    }
}

impl Render for BetweenExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        operand(w, PrecedenceTier::KeywordCondition, &self.value)?;
        w.push_str(if self.negated { " NOT BETWEEN " } else { " BETWEEN " });
        operand(w, PrecedenceTier::KeywordCondition, &self.from)?;
        w.push_str(" AND ");
        operand(w, PrecedenceTier::KeywordCondition, &self.to)
    }
}

impl Render for ExistsExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(if self.negated { "NOT EXISTS " } else { "EXISTS " });
        operand(w, PrecedenceTier::KeywordCondition, &self.value)
    }
}

impl Render for ComparisonExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        operand(w, PrecedenceTier::Comparison, &self.left)?;
        w.push(' ');
        w.keyword(self.operator)?;
        w.push(' ');
        operand(w, PrecedenceTier::Comparison, &self.right)
    }
}

fn render_logical(
    w: &mut SqlWriter<'_>,
    operands: &LogicalExpression,
    operator: LogicalOperator,
    tier: PrecedenceTier,
) -> Result<(), Error> {
    operand(w, tier, &operands.left)?;
    w.push(' ');
    w.keyword(operator)?;
    w.push(' ');
    operand(w, tier, &operands.right)
}

impl Render for Expression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.nested(|w| match self {
            Expression::Column(column) => w.node(column),
            Expression::Literal(literal) => w.node(literal),
            Expression::Wildcard(wildcard) => w.node(wildcard),
            Expression::Function(function) => w.node(function),
            Expression::Window(window) => w.node(window),
            Expression::CaseCondition(case) => w.node(case),
            Expression::CaseValue(case) => w.node(case),
            Expression::SubQuery(subquery) => w.node(subquery),
            Expression::SubValue(values) => w.node(values),
            Expression::Index(index) => w.node(index),
            Expression::Unary(unary) => w.node(unary),
            Expression::Compute(compute) => w.node(compute),
            Expression::KeywordCondition(condition) => w.node(condition),
            Expression::Between(between) => w.node(between),
            Expression::Exists(exists) => w.node(exists),
            Expression::Comparison(comparison) => w.node(comparison),
            Expression::Not(expression) => {
                w.keyword(LogicalOperator::Not)?;
                w.push(' ');
                operand(w, PrecedenceTier::LogicalNot, expression)
            }
            Expression::And(operands) => {
                render_logical(w, operands, LogicalOperator::And, PrecedenceTier::LogicalAnd)
            }
            Expression::Xor(operands) => {
                render_logical(w, operands, LogicalOperator::Xor, PrecedenceTier::LogicalXor)
            }
            Expression::Or(operands) => {
                render_logical(w, operands, LogicalOperator::Or, PrecedenceTier::LogicalOr)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;

    use super::*;
    use crate::ast::clause::OrderByColumn;
    use crate::ast::element::CastType;
    use crate::catalog::{CastDataType, CompareOperator, ComputeOperator};

    fn col(name: &str) -> Expression {
        Expression::column(name)
    }

    fn lit(text: &str) -> Expression {
        Expression::literal(text)
    }

    #[test]
    fn test_column_quoting() {
        assert_eq!(col("a").render(Dialect::MySql).unwrap(), "`a`");
        assert_eq!(
            ColumnName::qualified("t", "a").render(Dialect::MySql).unwrap(),
            "`t`.`a`"
        );
        assert_eq!(col("*").render(Dialect::MySql).unwrap(), "*");
        assert_eq!(
            ColumnName::qualified("t", "CURRENT_DATE")
                .render(Dialect::MySql)
                .unwrap(),
            "`t`.CURRENT_DATE"
        );
    }

    #[test]
    fn test_db2_pseudo_columns() {
        assert_eq!(
            col("CURRENT_TIMESTAMP").render(Dialect::Db2).unwrap(),
            "CURRENT TIMESTAMP"
        );
        assert_eq!(col("CURRENT_TIME").render(Dialect::Db2).unwrap(), "CURRENT TIME");
        assert_eq!(
            col("CURRENT_TIMESTAMP").render(Dialect::MySql).unwrap(),
            "CURRENT_TIMESTAMP"
        );
        // Ordinary identifiers are left alone, even when they contain the pseudo-column text.
        assert_eq!(
            col("CURRENT_DATE_X").render(Dialect::Db2).unwrap(),
            "`CURRENT_DATE_X`"
        );
    }

    #[test]
    fn test_functions() {
        let count = Expression::Function(Function::Aggregate(AggregateFunction {
            name: crate::ast::element::FunctionName::new("COUNT"),
            params: vec![col("id")],
            distinct: true,
        }));
        assert_eq!(count.render(Dialect::MySql).unwrap(), "COUNT(DISTINCT `id`)");

        let cast = Expression::Function(Function::Cast(CastFunction {
            expression: Box::new(col("x")),
            cast_type: CastType::new(CastDataType::Signed),
        }));
        assert_eq!(cast.render(Dialect::MySql).unwrap(), "CAST(`x` AS SIGNED)");

        let extract = Expression::Function(Function::Extract(ExtractFunction {
            unit: Box::new(lit("YEAR")),
            expression: Box::new(col("d")),
        }));
        assert_eq!(extract.render(Dialect::MySql).unwrap(), "EXTRACT(YEAR FROM `d`)");

        let concat = Expression::Function(Function::Normal(NormalFunction::new(
            "concat",
            vec![col("a"), lit("'-'"), col("b")],
        )));
        assert_eq!(
            concat.render(Dialect::Hive).unwrap(),
            "concat(`a`, '-', `b`)"
        );
    }

    #[test]
    fn test_window() {
        let window = Expression::Window(WindowExpression {
            function: Box::new(Expression::Function(Function::Normal(NormalFunction::new(
                "row_number",
                vec![],
            )))),
            partition_by: vec![col("a")],
            order_by: vec![OrderByColumn::desc(col("b"))],
            frame: Some(WindowFrame {
                from: WindowBound::UnboundedPreceding,
                to: WindowBound::CurrentRow,
            }),
        });
        assert_eq!(
            window.render(Dialect::Hive).unwrap(),
            "row_number() OVER (PARTITION BY `a` ORDER BY `b` DESC ROWS BETWEEN UNBOUNDED PRECEDING AND CURRENT ROW)"
        );

        let bare = WindowExpression {
            function: Box::new(col("x")),
            partition_by: vec![],
            order_by: vec![],
            frame: Some(WindowFrame {
                from: WindowBound::Preceding(3),
                to: WindowBound::Following(1),
            }),
        };
        assert_eq!(
            bare.render(Dialect::Hive).unwrap(),
            "`x` OVER (ROWS BETWEEN 3 PRECEDING AND 1 FOLLOWING)"
        );
    }

    #[test]
    fn test_case_layouts() {
        let searched = Expression::CaseCondition(CaseConditionExpression {
            cases: vec![CaseWhen {
                when: Expression::compare(col("a"), CompareOperator::Greater, lit("1")),
                then: lit("'big'"),
            }],
            else_value: Some(Box::new(lit("'small'"))),
        });
        assert_eq!(
            searched.render(Dialect::MySql).unwrap(),
            "CASE WHEN `a` > 1 THEN 'big' ELSE 'small' END"
        );

        let simple = Expression::CaseValue(CaseValueExpression {
            value: Box::new(col("k")),
            cases: vec![
                CaseWhen {
                    when: lit("1"),
                    then: lit("'one'"),
                },
                CaseWhen {
                    when: lit("2"),
                    then: lit("'two'"),
                },
            ],
            else_value: None,
        });
        assert_eq!(
            simple.render(Dialect::MySql).unwrap(),
            "CASE `k`\n    WHEN 1 THEN 'one'\n    WHEN 2 THEN 'two'\nEND"
        );
    }

    #[test]
    fn test_keyword_conditions() {
        let is_not_null = Expression::KeywordCondition(KeywordConditionExpression {
            keyword: ConditionKeyword::Is,
            negated: true,
            left: Box::new(col("a")),
            right: Box::new(lit("NULL")),
        });
        assert_eq!(is_not_null.render(Dialect::MySql).unwrap(), "`a` IS NOT NULL");

        let not_in = Expression::KeywordCondition(KeywordConditionExpression {
            keyword: ConditionKeyword::In,
            negated: true,
            left: Box::new(col("a")),
            right: Box::new(Expression::SubValue(SubValue {
                values: vec![lit("1"), lit("2")],
            })),
        });
        assert_eq!(not_in.render(Dialect::MySql).unwrap(), "`a` NOT IN (1, 2)");

        let between = Expression::Between(BetweenExpression {
            negated: false,
            value: Box::new(col("a")),
            from: Box::new(lit("1")),
            to: Box::new(lit("9")),
        });
        assert_eq!(between.render(Dialect::MySql).unwrap(), "`a` BETWEEN 1 AND 9");
    }

    #[test]
    fn test_logical_chain() {
        let expr = Expression::or(
            Expression::and(
                Expression::compare(col("a"), CompareOperator::Equal, lit("1")),
                Expression::not(col("b")),
            ),
            Expression::xor(col("c"), col("d")),
        );
        assert_eq!(
            expr.render(Dialect::Default).unwrap(),
            "`a` = 1 AND NOT `b` OR `c` XOR `d`"
        );
    }

    #[test]
    fn test_modulo_gate() {
        let expr = Expression::compute(col("a"), ComputeOperator::Mod, lit("2"));
        assert_eq!(expr.render(Dialect::SqlServer).unwrap(), "`a` % 2");
        assert!(matches!(
            expr.render(Dialect::Db2),
            Err(Error::UnsupportedDialectFeature { .. })
        ));
    }

    #[test]
    fn test_index_only_in_hive() {
        let expr = Expression::Index(IndexExpression {
            array: Box::new(col("arr")),
            index: Box::new(lit("0")),
        });
        assert_eq!(expr.render(Dialect::Hive).unwrap(), "`arr`[0]");
        assert_eq!(
            expr.render(Dialect::MySql),
            Err(Error::UnsupportedDialectFeature {
                feature: "array subscript",
                dialect: Dialect::MySql
            })
        );
    }

    #[test]
    fn test_unary() {
        let expr = Expression::Unary(UnaryExpression {
            operator: ComputeOperator::Minus,
            expression: Box::new(col("x")),
        });
        assert_eq!(expr.render(Dialect::MySql).unwrap(), "-`x`");
    }

    #[test]
    fn test_looser_operand_is_rejected() {
        let sum = Expression::compute(
            Expression::or(col("a"), col("b")),
            ComputeOperator::Plus,
            col("c"),
        );
        assert_eq!(
            sum.render(Dialect::MySql),
            Err(Error::PrecedenceViolation {
                parent: PrecedenceTier::Compute,
                child: PrecedenceTier::LogicalOr,
            })
        );

        let conjunction = Expression::and(
            col("x"),
            Expression::or(
                col("a"),
                Expression::compare(col("b"), CompareOperator::Equal, lit("1")),
            ),
        );
        assert_eq!(
            conjunction.render(Dialect::MySql),
            Err(Error::PrecedenceViolation {
                parent: PrecedenceTier::LogicalAnd,
                child: PrecedenceTier::LogicalOr,
            })
        );

        let negated_comparison = Expression::Unary(UnaryExpression {
            operator: ComputeOperator::Minus,
            expression: Box::new(Expression::compare(col("a"), CompareOperator::Less, lit("0"))),
        });
        assert!(matches!(
            negated_comparison.render(Dialect::Hive),
            Err(Error::PrecedenceViolation { .. })
        ));
    }

    #[test]
    fn test_same_tier_chains_render() {
        let sum = Expression::compute(
            Expression::compute(col("a"), ComputeOperator::Plus, col("b")),
            ComputeOperator::Minus,
            lit("1"),
        );
        assert_eq!(sum.render(Dialect::MySql).unwrap(), "`a` + `b` - 1");

        let comparison = Expression::compare(sum, CompareOperator::Greater, lit("0"));
        let chain = Expression::and(
            Expression::and(comparison, Expression::not(col("flag"))),
            col("ok"),
        );
        assert_eq!(
            chain.render(Dialect::MySql).unwrap(),
            "`a` + `b` - 1 > 0 AND NOT `flag` AND `ok`"
        );
    }
}
