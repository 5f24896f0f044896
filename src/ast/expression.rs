//! Expression nodes.
//!
//! Expressions are organised in precedence tiers, from atoms (tightest) to
//! logical `OR` (loosest). A composite expression only embeds children of its
//! own tier or a tighter one, which is what lets the renderer emit the tree
//! without inserting parentheses.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::ast::clause::OrderByColumn;
use crate::ast::element::{CastType, FunctionName};
use crate::ast::literal::Literal;
use crate::ast::statement::SelectStatement;
use crate::catalog::{CompareOperator, ComputeOperator, LogicalOperator, WindowRowType};

/// Precedence tier of an expression, tightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrecedenceTier {
    /// Columns, literals, function calls, `CASE`, subqueries, windows, subscripts.
    Atom,
    /// `+x`, `-x`, `~x`
    Unary,
    /// Arithmetic and bitwise binary operators.
    Compute,
    /// `IS`, `IN`, `LIKE`, `RLIKE`, `REGEXP`, `BETWEEN`, `EXISTS`.
    KeywordCondition,
    /// `=`, `<>`, `<`, ...
    Comparison,
    /// `NOT x`
    LogicalNot,
    /// `x AND y`
    LogicalAnd,
    /// `x XOR y`
    LogicalXor,
    /// `x OR y`
    LogicalOr,
}

impl PrecedenceTier {
    /// Human-readable tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PrecedenceTier::Atom => "atom",
            PrecedenceTier::Unary => "unary",
            PrecedenceTier::Compute => "compute",
            PrecedenceTier::KeywordCondition => "keyword condition",
            PrecedenceTier::Comparison => "comparison",
            PrecedenceTier::LogicalNot => "logical NOT",
            PrecedenceTier::LogicalAnd => "logical AND",
            PrecedenceTier::LogicalXor => "logical XOR",
            PrecedenceTier::LogicalOr => "logical OR",
        }
    }
}

impl Display for PrecedenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any expression.
///
/// Dropping a tree is iterative, so arbitrarily deep operator chains are
/// released without growing the call stack. `Clone`, `PartialEq`, `Hash` and
/// `Debug` still recurse once per level; trees coming from untrusted input
/// should be checked against a depth bound (see [`Expression::depth`]) first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum Expression {
    /// A column reference.
    Column(ColumnName),
    /// A literal, kept verbatim.
    Literal(Literal),
    /// `*` or `t.*`
    Wildcard(Wildcard),
    /// A function call.
    Function(Function),
    /// A windowed function call.
    Window(WindowExpression),
    /// `CASE WHEN cond THEN ... END`
    CaseCondition(CaseConditionExpression),
    /// `CASE value WHEN v THEN ... END`
    CaseValue(CaseValueExpression),
    /// A parenthesised subquery.
    SubQuery(SubQuery),
    /// A parenthesised value list.
    SubValue(SubValue),
    /// An array subscript (Hive).
    Index(IndexExpression),
    /// A unary operator applied to an expression.
    Unary(UnaryExpression),
    /// An arithmetic or bitwise binary expression.
    Compute(ComputeExpression),
    /// `IS`, `IN`, `LIKE`, `RLIKE` or `REGEXP`, optionally negated.
    KeywordCondition(KeywordConditionExpression),
    /// `x [NOT] BETWEEN a AND b`
    Between(BetweenExpression),
    /// `[NOT] EXISTS (subquery)`
    Exists(ExistsExpression),
    /// A comparison.
    Comparison(ComparisonExpression),
    /// `NOT x`
    Not(Box<Expression>),
    /// `x AND y`
    And(LogicalExpression),
    /// `x XOR y`
    Xor(LogicalExpression),
    /// `x OR y`
    Or(LogicalExpression),
}

impl Expression {
    /// Shorthand for an unqualified column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(ColumnName::new(name))
    }

    /// Shorthand for a literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::new(value))
    }

    /// Shorthand for a comparison.
    #[must_use]
    pub fn compare(left: Expression, operator: CompareOperator, right: Expression) -> Self {
        Expression::Comparison(ComparisonExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// Shorthand for an arithmetic or bitwise expression.
    #[must_use]
    pub fn compute(left: Expression, operator: ComputeOperator, right: Expression) -> Self {
        Expression::Compute(ComputeExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    /// `NOT expression`
    #[must_use]
    pub fn not(expression: Expression) -> Self {
        Expression::Not(Box::new(expression))
    }

    /// `left AND right`
    #[must_use]
    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(LogicalExpression::new(left, right))
    }

    /// `left XOR right`
    #[must_use]
    pub fn xor(left: Expression, right: Expression) -> Self {
        Expression::Xor(LogicalExpression::new(left, right))
    }

    /// `left OR right`
    #[must_use]
    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(LogicalExpression::new(left, right))
    }

    /// The precedence tier this expression belongs to.
    #[must_use]
    pub fn tier(&self) -> PrecedenceTier {
        match self {
            Expression::Column(_)
            | Expression::Literal(_)
            | Expression::Wildcard(_)
            | Expression::Function(_)
            | Expression::Window(_)
            | Expression::CaseCondition(_)
            | Expression::CaseValue(_)
            | Expression::SubQuery(_)
            | Expression::SubValue(_)
            | Expression::Index(_) => PrecedenceTier::Atom,
            Expression::Unary(_) => PrecedenceTier::Unary,
            Expression::Compute(_) => PrecedenceTier::Compute,
            Expression::KeywordCondition(_) | Expression::Between(_) | Expression::Exists(_) => {
                PrecedenceTier::KeywordCondition
            }
            Expression::Comparison(_) => PrecedenceTier::Comparison,
            Expression::Not(_) => PrecedenceTier::LogicalNot,
            Expression::And(_) => PrecedenceTier::LogicalAnd,
            Expression::Xor(_) => PrecedenceTier::LogicalXor,
            Expression::Or(_) => PrecedenceTier::LogicalOr,
        }
    }

    /// The operator bound to a logical variant, if this is one.
    #[must_use]
    pub const fn logical_operator(&self) -> Option<LogicalOperator> {
        match self {
            Expression::Not(_) => Some(LogicalOperator::Not),
            Expression::And(_) => Some(LogicalOperator::And),
            Expression::Xor(_) => Some(LogicalOperator::Xor),
            Expression::Or(_) => Some(LogicalOperator::Or),
            _ => None,
        }
    }

    /// Number of expression levels from this node down to its deepest leaf.
    ///
    /// Computed with an explicit stack. Subqueries count as leaves.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = alloc::vec![(self, 1)];
        let mut children = Vec::new();
        while let Some((expression, level)) = stack.pop() {
            deepest = deepest.max(level);
            expression.push_children(&mut children);
            stack.extend(children.drain(..).map(|child| (child, level + 1)));
        }
        deepest
    }

    fn push_children<'a>(&'a self, out: &mut Vec<&'a Expression>) {
        match self {
            Expression::Column(_)
            | Expression::Literal(_)
            | Expression::Wildcard(_)
            | Expression::SubQuery(_) => {}
            Expression::Function(function) => match function {
                Function::Normal(NormalFunction { params, .. })
                | Function::Aggregate(AggregateFunction { params, .. }) => out.extend(params),
                Function::Cast(cast) => out.push(&cast.expression),
                Function::Extract(extract) => {
                    out.push(&extract.unit);
                    out.push(&extract.expression);
                }
            },
            Expression::Window(window) => {
                out.push(&window.function);
                out.extend(&window.partition_by);
                out.extend(window.order_by.iter().map(|column| &column.column));
            }
            Expression::CaseCondition(case) => {
                out.extend(case.cases.iter().flat_map(|when| [&when.when, &when.then]));
                out.extend(case.else_value.as_deref());
            }
            Expression::CaseValue(case) => {
                out.push(&case.value);
                out.extend(case.cases.iter().flat_map(|when| [&when.when, &when.then]));
                out.extend(case.else_value.as_deref());
            }
            Expression::SubValue(values) => out.extend(&values.values),
            Expression::Index(index) => {
                out.push(&index.array);
                out.push(&index.index);
            }
            Expression::Unary(unary) => out.push(&unary.expression),
            Expression::Compute(compute) => {
                out.push(&compute.left);
                out.push(&compute.right);
            }
            Expression::KeywordCondition(condition) => {
                out.push(&condition.left);
                out.push(&condition.right);
            }
            Expression::Between(between) => {
                out.push(&between.value);
                out.push(&between.from);
                out.push(&between.to);
            }
            Expression::Exists(exists) => out.push(&exists.value),
            Expression::Comparison(comparison) => {
                out.push(&comparison.left);
                out.push(&comparison.right);
            }
            Expression::Not(expression) => out.push(expression),
            Expression::And(operands) | Expression::Xor(operands) | Expression::Or(operands) => {
                out.push(&operands.left);
                out.push(&operands.right);
            }
        }
    }

    /// Moves every child expression onto `out`, leaving cheap leaves behind.
    fn take_children(&mut self, out: &mut Vec<Expression>) {
        fn take(slot: &mut Box<Expression>) -> Expression {
            core::mem::replace(&mut **slot, Expression::Wildcard(Wildcard::default()))
        }
        fn take_cases(cases: &mut Vec<CaseWhen>, out: &mut Vec<Expression>) {
            for case in cases.drain(..) {
                out.push(case.when);
                out.push(case.then);
            }
        }

        match self {
            Expression::Column(_)
            | Expression::Literal(_)
            | Expression::Wildcard(_)
            | Expression::SubQuery(_) => {}
            Expression::Function(function) => match function {
                Function::Normal(NormalFunction { params, .. })
                | Function::Aggregate(AggregateFunction { params, .. }) => out.append(params),
                Function::Cast(cast) => out.push(take(&mut cast.expression)),
                Function::Extract(extract) => {
                    out.push(take(&mut extract.unit));
                    out.push(take(&mut extract.expression));
                }
            },
            Expression::Window(window) => {
                out.push(take(&mut window.function));
                out.append(&mut window.partition_by);
                out.extend(window.order_by.drain(..).map(|column| column.column));
            }
            Expression::CaseCondition(case) => {
                take_cases(&mut case.cases, out);
                out.extend(case.else_value.take().map(|value| *value));
            }
            Expression::CaseValue(case) => {
                out.push(take(&mut case.value));
                take_cases(&mut case.cases, out);
                out.extend(case.else_value.take().map(|value| *value));
            }
            Expression::SubValue(values) => out.append(&mut values.values),
            Expression::Index(index) => {
                out.push(take(&mut index.array));
                out.push(take(&mut index.index));
            }
            Expression::Unary(unary) => out.push(take(&mut unary.expression)),
            Expression::Compute(compute) => {
                out.push(take(&mut compute.left));
                out.push(take(&mut compute.right));
            }
            Expression::KeywordCondition(condition) => {
                out.push(take(&mut condition.left));
                out.push(take(&mut condition.right));
            }
            Expression::Between(between) => {
                out.push(take(&mut between.value));
                out.push(take(&mut between.from));
                out.push(take(&mut between.to));
            }
            Expression::Exists(exists) => out.push(take(&mut exists.value)),
            Expression::Comparison(comparison) => {
                out.push(take(&mut comparison.left));
                out.push(take(&mut comparison.right));
            }
            Expression::Not(expression) => out.push(take(expression)),
            Expression::And(operands) | Expression::Xor(operands) | Expression::Or(operands) => {
                out.push(take(&mut operands.left));
                out.push(take(&mut operands.right));
            }
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut expression) = stack.pop() {
            expression.take_children(&mut stack);
        }
    }
}

impl From<ColumnName> for Expression {
    fn from(column: ColumnName) -> Self {
        Expression::Column(column)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Literal(literal)
    }
}

impl From<Function> for Expression {
    fn from(function: Function) -> Self {
        Expression::Function(function)
    }
}

impl From<SubQuery> for Expression {
    fn from(subquery: SubQuery) -> Self {
        Expression::SubQuery(subquery)
    }
}

impl From<SubValue> for Expression {
    fn from(values: SubValue) -> Self {
        Expression::SubValue(values)
    }
}

/// A column reference, optionally qualified by a table name or alias.
///
/// The pseudo-columns `*`, `CURRENT_DATE`, `CURRENT_TIME` and
/// `CURRENT_TIMESTAMP` render unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ColumnName {
    /// Table name or alias.
    pub table: Option<String>,
    /// Column name.
    pub column: String,
}

impl ColumnName {
    /// Column names that are rendered without quotes.
    pub const PSEUDO_COLUMNS: [&'static str; 4] =
        ["*", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP"];

    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    /// Creates a table-qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }

    /// Whether this references one of the unquoted pseudo-columns.
    #[must_use]
    pub fn is_pseudo_column(&self) -> bool {
        Self::PSEUDO_COLUMNS.contains(&self.column.as_str())
    }
}

/// `*` or `table.*`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct Wildcard {
    /// Table the wildcard is restricted to.
    pub table: Option<String>,
}

/// A function call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum Function {
    /// `name(args)`
    Normal(NormalFunction),
    /// `name([DISTINCT] args)`
    Aggregate(AggregateFunction),
    /// `CAST(expr AS type)`
    Cast(CastFunction),
    /// `EXTRACT(unit FROM expr)`
    Extract(ExtractFunction),
}

/// `name(args)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct NormalFunction {
    /// Function name.
    pub name: FunctionName,
    /// Arguments, in order.
    pub params: Vec<Expression>,
}

impl NormalFunction {
    /// Creates a function call.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<Expression>) -> Self {
        Self {
            name: FunctionName::new(name),
            params,
        }
    }
}

/// `name([DISTINCT] args)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct AggregateFunction {
    /// Function name.
    pub name: FunctionName,
    /// Arguments, in order.
    pub params: Vec<Expression>,
    /// Whether the arguments are preceded by `DISTINCT`.
    pub distinct: bool,
}

/// `CAST(expression AS type)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CastFunction {
    /// The value being converted.
    pub expression: Box<Expression>,
    /// The target type.
    pub cast_type: CastType,
}

/// `EXTRACT(unit FROM expression)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ExtractFunction {
    /// The unit before `FROM`.
    pub unit: Box<Expression>,
    /// The value after `FROM`.
    pub expression: Box<Expression>,
}

/// One end of a `ROWS BETWEEN` window frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum WindowBound {
    /// `UNBOUNDED PRECEDING`
    UnboundedPreceding,
    /// `n PRECEDING`
    Preceding(u64),
    /// `CURRENT ROW`
    CurrentRow,
    /// `n FOLLOWING`
    Following(u64),
    /// `UNBOUNDED FOLLOWING`
    UnboundedFollowing,
}

impl WindowBound {
    /// The bound kind keyword.
    #[must_use]
    pub const fn row_type(self) -> WindowRowType {
        match self {
            WindowBound::UnboundedPreceding | WindowBound::Preceding(_) => WindowRowType::Preceding,
            WindowBound::CurrentRow => WindowRowType::CurrentRow,
            WindowBound::Following(_) | WindowBound::UnboundedFollowing => WindowRowType::Following,
        }
    }
}

/// `ROWS BETWEEN from AND to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct WindowFrame {
    /// Start of the frame.
    pub from: WindowBound,
    /// End of the frame.
    pub to: WindowBound,
}

/// `function OVER (PARTITION BY ... ORDER BY ... ROWS BETWEEN ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct WindowExpression {
    /// The windowed call, a function or a subscript over one.
    pub function: Box<Expression>,
    /// `PARTITION BY` expressions.
    pub partition_by: Vec<Expression>,
    /// `ORDER BY` columns.
    pub order_by: Vec<OrderByColumn>,
    /// Row frame.
    pub frame: Option<WindowFrame>,
}

/// `WHEN x THEN y`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CaseWhen {
    /// Condition or matched value.
    pub when: Expression,
    /// Result.
    pub then: Expression,
}

/// `CASE WHEN cond THEN x ... [ELSE y] END`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CaseConditionExpression {
    /// Branches, in order.
    pub cases: Vec<CaseWhen>,
    /// `ELSE` value.
    pub else_value: Option<Box<Expression>>,
}

/// `CASE value WHEN v THEN x ... [ELSE y] END`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CaseValueExpression {
    /// The value being matched.
    pub value: Box<Expression>,
    /// Branches, in order.
    pub cases: Vec<CaseWhen>,
    /// `ELSE` value.
    pub else_value: Option<Box<Expression>>,
}

/// `(SELECT ...)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SubQuery {
    /// The query.
    pub statement: Box<SelectStatement>,
}

impl SubQuery {
    /// Wraps a query.
    #[must_use]
    pub fn new(statement: SelectStatement) -> Self {
        Self {
            statement: Box::new(statement),
        }
    }
}

/// `(a, b, c)`, as used in `VALUES` rows and `IN` lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SubValue {
    /// Values, in order.
    pub values: Vec<Expression>,
}

/// `array[index]` (Hive only)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct IndexExpression {
    /// The subscripted value.
    pub array: Box<Expression>,
    /// The subscript.
    pub index: Box<Expression>,
}

/// `+x`, `-x` or `~x`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UnaryExpression {
    /// The prefix operator.
    pub operator: ComputeOperator,
    /// The operand.
    pub expression: Box<Expression>,
}

/// `left op right` with an arithmetic, bitwise or concatenation operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ComputeExpression {
    /// Left operand.
    pub left: Box<Expression>,
    /// Operator.
    pub operator: ComputeOperator,
    /// Right operand.
    pub right: Box<Expression>,
}

/// The keyword of a [`KeywordConditionExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum ConditionKeyword {
    /// `IS`
    Is,
    /// `IN`
    In,
    /// `LIKE`
    Like,
    /// `RLIKE`
    Rlike,
    /// `REGEXP`
    Regexp,
}

impl ConditionKeyword {
    /// The keyword spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ConditionKeyword::Is => "IS",
            ConditionKeyword::In => "IN",
            ConditionKeyword::Like => "LIKE",
            ConditionKeyword::Rlike => "RLIKE",
            ConditionKeyword::Regexp => "REGEXP",
        }
    }
}

/// `left [NOT] keyword right`; `IS` negates as `IS NOT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct KeywordConditionExpression {
    /// The connecting keyword.
    pub keyword: ConditionKeyword,
    /// Whether the condition is negated.
    pub negated: bool,
    /// Left operand.
    pub left: Box<Expression>,
    /// Right operand.
    pub right: Box<Expression>,
}

/// `value [NOT] BETWEEN from AND to`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct BetweenExpression {
    /// Whether the range test is negated.
    pub negated: bool,
    /// The tested value.
    pub value: Box<Expression>,
    /// Lower bound.
    pub from: Box<Expression>,
    /// Upper bound.
    pub to: Box<Expression>,
}

/// `[NOT] EXISTS subquery`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ExistsExpression {
    /// Whether the test is negated.
    pub negated: bool,
    /// The subquery.
    pub value: Box<Expression>,
}

/// `left op right` with a comparison operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ComparisonExpression {
    /// Left operand.
    pub left: Box<Expression>,
    /// Operator.
    pub operator: CompareOperator,
    /// Right operand.
    pub right: Box<Expression>,
}

/// Operands of `AND`, `XOR` and `OR`; the operator is fixed by the [`Expression`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct LogicalExpression {
    /// Left operand.
    pub left: Box<Expression>,
    /// Right operand.
    pub right: Box<Expression>,
}

impl LogicalExpression {
    /// Boxes both operands.
    #[must_use]
    pub fn new(left: Expression, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_ordered() {
        let a = Expression::column("a");
        let b = Expression::literal("1");
        let cmp = Expression::compare(a.clone(), CompareOperator::Equal, b.clone());
        let or = Expression::or(cmp.clone(), Expression::not(cmp.clone()));

        assert_eq!(a.tier(), PrecedenceTier::Atom);
        assert!(cmp.tier() > Expression::compute(a, ComputeOperator::Plus, b).tier());
        assert_eq!(or.tier(), PrecedenceTier::LogicalOr);
        assert!(PrecedenceTier::LogicalAnd < PrecedenceTier::LogicalXor);
    }

    #[test]
    fn test_logical_operator_constants() {
        let a = Expression::column("a");
        assert_eq!(
            Expression::and(a.clone(), a.clone()).logical_operator(),
            Some(LogicalOperator::And)
        );
        assert_eq!(
            Expression::xor(a.clone(), a.clone()).logical_operator(),
            Some(LogicalOperator::Xor)
        );
        assert_eq!(a.logical_operator(), None);
    }

    #[test]
    fn test_pseudo_columns() {
        assert!(ColumnName::new("CURRENT_DATE").is_pseudo_column());
        assert!(ColumnName::qualified("t", "*").is_pseudo_column());
        assert!(!ColumnName::new("current_date").is_pseudo_column());
    }

    #[test]
    fn test_depth() {
        let a = Expression::column("a");
        assert_eq!(a.depth(), 1);
        let case = Expression::CaseCondition(CaseConditionExpression {
            cases: alloc::vec![CaseWhen {
                when: Expression::not(a.clone()),
                then: Expression::literal("1"),
            }],
            else_value: None,
        });
        assert_eq!(case.depth(), 3);
        assert_eq!(Expression::or(case, a).depth(), 4);
    }

    #[test]
    fn test_drop_leaves_clone_intact() {
        let tree = Expression::and(
            Expression::not(Expression::column("a")),
            Expression::compare(
                Expression::column("b"),
                CompareOperator::Equal,
                Expression::literal("1"),
            ),
        );
        let copy = tree.clone();
        drop(tree);
        assert_eq!(copy.depth(), 3);
        assert_eq!(copy.tier(), PrecedenceTier::LogicalAnd);
    }
}
