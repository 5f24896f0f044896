//! Clause nodes: keyword-introduced parts of a statement.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::element::{Alias, MultiAlias, TableName};
use crate::ast::expression::{Expression, Function, SubQuery};
use crate::ast::statement::SelectStatement;
use crate::catalog::{JoinType, OrderType};

/// A projected value with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SelectColumn {
    /// The projected value.
    pub value: Expression,
    /// The output name.
    pub alias: Option<Alias>,
}

impl SelectColumn {
    /// Creates an unaliased projection.
    #[must_use]
    pub fn new(value: Expression) -> Self {
        Self { value, alias: None }
    }

    /// Creates an aliased projection.
    #[must_use]
    pub fn aliased(value: Expression, alias: impl Into<String>) -> Self {
        Self {
            value,
            alias: Some(Alias::new(alias)),
        }
    }
}

/// `SELECT [DISTINCT] columns`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SelectClause {
    /// Whether `DISTINCT` is present.
    pub distinct: bool,
    /// Projected columns, in order.
    pub columns: Vec<SelectColumn>,
}

impl SelectClause {
    /// Creates a non-distinct projection list.
    #[must_use]
    pub fn new(columns: Vec<SelectColumn>) -> Self {
        Self {
            distinct: false,
            columns,
        }
    }
}

/// What a `FROM` or `JOIN` entry reads from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum TableSource {
    /// A named table.
    Table(TableName),
    /// A derived table.
    SubQuery(SubQuery),
}

/// A `FROM` or `JOIN` entry with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct FromTable {
    /// The table or subquery.
    pub source: TableSource,
    /// The correlation name.
    pub alias: Option<Alias>,
}

impl FromTable {
    /// Creates an unaliased entry for a named table.
    #[must_use]
    pub fn table(name: TableName) -> Self {
        Self {
            source: TableSource::Table(name),
            alias: None,
        }
    }

    /// Sets the correlation name.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(Alias::new(alias));
        self
    }
}

/// `FROM a, b`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct FromClause {
    /// Entries, in order.
    pub tables: Vec<FromTable>,
}

impl FromClause {
    /// `FROM table`
    #[must_use]
    pub fn table(name: TableName) -> Self {
        Self {
            tables: alloc::vec![FromTable::table(name)],
        }
    }
}

/// `LATERAL VIEW [OUTER] function view AS a, b` (Hive)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct LateralViewClause {
    /// Whether rows producing no output are kept.
    pub outer: bool,
    /// The table-generating function.
    pub function: Function,
    /// Name of the generated view.
    pub view_name: String,
    /// Names of the generated columns.
    pub alias: MultiAlias,
}

/// How a `JOIN` matches rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum JoinRule {
    /// `ON condition`
    On(Expression),
    /// `USING(a, b)`, modelled as a call to the `USING` function.
    Using(Function),
}

/// `join_type table [rule]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct JoinClause {
    /// The join keyword.
    pub join_type: JoinType,
    /// The joined table.
    pub table: FromTable,
    /// The match rule.
    pub rule: Option<JoinRule>,
}

/// `WHERE condition`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct WhereClause {
    /// The predicate.
    pub condition: Expression,
}

/// `HAVING condition`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct HavingClause {
    /// The predicate.
    pub condition: Expression,
}

/// `GROUPING SETS (a, (b, c))`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct GroupingSets {
    /// Grouping sets; single-column sets render unparenthesised.
    pub sets: Vec<Vec<Expression>>,
}

/// `GROUP BY columns [GROUPING SETS (...)] [WITH CUBE] [WITH ROLLUP]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct GroupByClause {
    /// Grouping columns, in order.
    pub columns: Vec<Expression>,
    /// Explicit grouping sets.
    pub grouping_sets: Option<GroupingSets>,
    /// Whether `WITH CUBE` is present.
    pub with_cube: bool,
    /// Whether `WITH ROLLUP` is present.
    pub with_rollup: bool,
}

impl GroupByClause {
    /// A plain `GROUP BY` over the given columns.
    #[must_use]
    pub fn new(columns: Vec<Expression>) -> Self {
        Self {
            columns,
            grouping_sets: None,
            with_cube: false,
            with_rollup: false,
        }
    }
}

/// A sort key of `ORDER BY` or `SORT BY`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct OrderByColumn {
    /// The sort key.
    pub column: Expression,
    /// Sort direction; `ASC` is implicit in the output.
    pub order: OrderType,
    /// Whether `NULLS FIRST` is present.
    pub nulls_first: bool,
    /// Whether `NULLS LAST` is present.
    pub nulls_last: bool,
}

impl OrderByColumn {
    /// An ascending sort key.
    #[must_use]
    pub fn new(column: Expression) -> Self {
        Self {
            column,
            order: OrderType::Asc,
            nulls_first: false,
            nulls_last: false,
        }
    }

    /// A descending sort key.
    #[must_use]
    pub fn desc(column: Expression) -> Self {
        Self {
            order: OrderType::Desc,
            ..Self::new(column)
        }
    }
}

/// `ORDER BY columns`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct OrderByClause {
    /// Sort keys, in order.
    pub columns: Vec<OrderByColumn>,
}

/// `SORT BY columns` (Hive)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SortByClause {
    /// Sort keys, in order.
    pub columns: Vec<OrderByColumn>,
}

/// `DISTRIBUTE BY columns` (Hive)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct DistributeByClause {
    /// Distribution keys, in order.
    pub columns: Vec<Expression>,
}

/// `CLUSTER BY columns` (Hive)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ClusterByClause {
    /// Clustering keys, in order.
    pub columns: Vec<Expression>,
}

/// `LIMIT offset, limit`
///
/// The clause always renders in the two-argument form; an absent offset
/// renders as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct LimitClause {
    /// Maximum number of rows.
    pub limit: u64,
    /// Number of rows skipped.
    pub offset: Option<u64>,
}

impl LimitClause {
    /// A limit without an offset.
    #[must_use]
    pub const fn new(limit: u64) -> Self {
        Self {
            limit,
            offset: None,
        }
    }

    /// Sets the offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// `name AS (query)`, one entry of a `WITH` clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct WithTable {
    /// Name of the common table expression.
    pub name: String,
    /// Its defining query.
    pub statement: SelectStatement,
}

impl WithTable {
    /// Creates a common table expression.
    #[must_use]
    pub fn new(name: impl Into<String>, statement: SelectStatement) -> Self {
        Self {
            name: name.into(),
            statement,
        }
    }
}

/// `WITH a AS (...), b AS (...)`
///
/// An empty clause renders as nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct WithClause {
    /// Common table expressions, in order.
    pub tables: Vec<WithTable>,
}

impl WithClause {
    /// A clause with no entries.
    #[must_use]
    pub const fn empty() -> Self {
        Self { tables: Vec::new() }
    }

    /// Whether the clause has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
