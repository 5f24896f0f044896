//! Statement nodes, other than table definitions which live in [`crate::ast::ddl`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::clause::{
    ClusterByClause, DistributeByClause, FromClause, GroupByClause, HavingClause, JoinClause,
    LateralViewClause, LimitClause, OrderByClause, SelectClause, SortByClause, WhereClause,
    WithClause,
};
use crate::ast::ddl::{AlterTableStatement, CreateTableAsStatement, CreateTableStatement};
use crate::ast::element::{ConfigString, PartitionExpression, TableName};
use crate::ast::expression::{ColumnName, Expression, SubValue};
use crate::catalog::{InsertType, UnionType};

/// A single `SELECT` query block.
///
/// Clauses render one per line in a fixed order. `SORT BY`, `DISTRIBUTE BY`
/// and `CLUSTER BY` are only emitted under Hive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SingleSelectStatement {
    /// Leading common table expressions, changed through
    /// [`WithClauseOwner::set_with_clause`](crate::WithClauseOwner::set_with_clause).
    pub(crate) with_clause: Option<WithClause>,
    /// The projection.
    pub select_clause: SelectClause,
    /// `FROM`
    pub from_clause: Option<FromClause>,
    /// `LATERAL VIEW` clauses, in order.
    pub lateral_view_clauses: Vec<LateralViewClause>,
    /// `JOIN` clauses, in order.
    pub join_clauses: Vec<JoinClause>,
    /// `WHERE`
    pub where_clause: Option<WhereClause>,
    /// `GROUP BY`
    pub group_by_clause: Option<GroupByClause>,
    /// `HAVING`
    pub having_clause: Option<HavingClause>,
    /// `ORDER BY`
    pub order_by_clause: Option<OrderByClause>,
    /// `SORT BY` (Hive)
    pub sort_by_clause: Option<SortByClause>,
    /// `DISTRIBUTE BY` (Hive)
    pub distribute_by_clause: Option<DistributeByClause>,
    /// `CLUSTER BY` (Hive)
    pub cluster_by_clause: Option<ClusterByClause>,
    /// `LIMIT`
    pub limit_clause: Option<LimitClause>,
}

impl SingleSelectStatement {
    /// A query with only a projection; every other clause is absent.
    #[must_use]
    pub fn new(select_clause: SelectClause) -> Self {
        Self {
            with_clause: None,
            select_clause,
            from_clause: None,
            lateral_view_clauses: Vec::new(),
            join_clauses: Vec::new(),
            where_clause: None,
            group_by_clause: None,
            having_clause: None,
            order_by_clause: None,
            sort_by_clause: None,
            distribute_by_clause: None,
            cluster_by_clause: None,
            limit_clause: None,
        }
    }

    /// Sets `FROM`.
    #[must_use]
    pub fn with_from(mut self, from_clause: FromClause) -> Self {
        self.from_clause = Some(from_clause);
        self
    }

    /// Appends a `LATERAL VIEW` clause.
    #[must_use]
    pub fn with_lateral_view(mut self, lateral_view: LateralViewClause) -> Self {
        self.lateral_view_clauses.push(lateral_view);
        self
    }

    /// Appends a `JOIN` clause.
    #[must_use]
    pub fn with_join(mut self, join: JoinClause) -> Self {
        self.join_clauses.push(join);
        self
    }

    /// Sets `WHERE`.
    #[must_use]
    pub fn with_where(mut self, where_clause: WhereClause) -> Self {
        self.where_clause = Some(where_clause);
        self
    }

    /// Sets `GROUP BY`.
    #[must_use]
    pub fn with_group_by(mut self, group_by_clause: GroupByClause) -> Self {
        self.group_by_clause = Some(group_by_clause);
        self
    }

    /// Sets `HAVING`.
    #[must_use]
    pub fn with_having(mut self, having_clause: HavingClause) -> Self {
        self.having_clause = Some(having_clause);
        self
    }

    /// Sets `ORDER BY`.
    #[must_use]
    pub fn with_order_by(mut self, order_by_clause: OrderByClause) -> Self {
        self.order_by_clause = Some(order_by_clause);
        self
    }

    /// Sets `SORT BY`.
    #[must_use]
    pub fn with_sort_by(mut self, sort_by_clause: SortByClause) -> Self {
        self.sort_by_clause = Some(sort_by_clause);
        self
    }

    /// Sets `DISTRIBUTE BY`.
    #[must_use]
    pub fn with_distribute_by(mut self, distribute_by_clause: DistributeByClause) -> Self {
        self.distribute_by_clause = Some(distribute_by_clause);
        self
    }

    /// Sets `CLUSTER BY`.
    #[must_use]
    pub fn with_cluster_by(mut self, cluster_by_clause: ClusterByClause) -> Self {
        self.cluster_by_clause = Some(cluster_by_clause);
        self
    }

    /// Sets `LIMIT`.
    #[must_use]
    pub fn with_limit(mut self, limit_clause: LimitClause) -> Self {
        self.limit_clause = Some(limit_clause);
        self
    }
}

/// A set operator followed by the query block it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UnionBranch {
    /// The set operator.
    pub union_type: UnionType,
    /// The right-hand query block.
    pub select: SingleSelectStatement,
}

/// Query blocks combined with `UNION`, `EXCEPT` or `INTERSECT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UnionSelectStatement {
    /// Leading common table expressions, changed through
    /// [`WithClauseOwner::set_with_clause`](crate::WithClauseOwner::set_with_clause).
    pub(crate) with_clause: Option<WithClause>,
    /// The first query block.
    pub head: SingleSelectStatement,
    /// The following operators and query blocks, in order.
    pub tail: Vec<UnionBranch>,
}

impl UnionSelectStatement {
    /// A compound query without a `WITH` clause.
    #[must_use]
    pub fn new(head: SingleSelectStatement, tail: Vec<UnionBranch>) -> Self {
        Self {
            with_clause: None,
            head,
            tail,
        }
    }
}

/// Any query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum SelectStatement {
    /// A single query block.
    Single(SingleSelectStatement),
    /// A compound query.
    Union(UnionSelectStatement),
}

impl From<SingleSelectStatement> for SelectStatement {
    fn from(statement: SingleSelectStatement) -> Self {
        SelectStatement::Single(statement)
    }
}

impl From<UnionSelectStatement> for SelectStatement {
    fn from(statement: UnionSelectStatement) -> Self {
        SelectStatement::Union(statement)
    }
}

/// Where the rows of an `INSERT` come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum InsertSource {
    /// `VALUES (...), (...)`
    Values(Vec<SubValue>),
    /// A query.
    Select(SelectStatement),
}

/// `INSERT INTO t [PARTITION (...)] [(columns)] {VALUES ... | SELECT ...}`
///
/// The `TABLE` keyword is only emitted under Hive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct InsertStatement {
    /// Leading common table expressions, changed through
    /// [`WithClauseOwner::set_with_clause`](crate::WithClauseOwner::set_with_clause).
    pub(crate) with_clause: Option<WithClause>,
    /// The insert keyword.
    pub insert_type: InsertType,
    /// The target table.
    pub table_name: TableName,
    /// Target partition (Hive).
    pub partition: Option<PartitionExpression>,
    /// Explicit target columns.
    pub columns: Option<Vec<ColumnName>>,
    /// The inserted rows.
    pub source: InsertSource,
}

impl InsertStatement {
    /// `INSERT INTO table` from the given source, with every optional part absent.
    #[must_use]
    pub fn new(table_name: TableName, source: InsertSource) -> Self {
        Self {
            with_clause: None,
            insert_type: InsertType::InsertInto,
            table_name,
            partition: None,
            columns: None,
            source,
        }
    }
}

/// `DROP TABLE [IF EXISTS] t`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct DropTableStatement {
    /// Whether `IF EXISTS` is present.
    pub if_exists: bool,
    /// The dropped table.
    pub table_name: TableName,
}

/// `SET name=value`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct SetStatement {
    /// The configuration entry.
    pub config: ConfigString,
}

/// `ANALYZE TABLE t ...`
///
/// Hive renders the `COMPUTE STATISTICS` form, MySQL the bare form. Other
/// dialects cannot express the statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct AnalyzeTableStatement {
    /// The analysed table.
    pub table_name: TableName,
    /// Restricts the analysis to a partition (Hive).
    pub partition: Option<PartitionExpression>,
    /// `FOR COLUMNS` (Hive)
    pub for_columns: bool,
    /// `CACHE METADATA` (Hive)
    pub cache_metadata: bool,
    /// `NOSCAN` (Hive)
    pub noscan: bool,
}

impl AnalyzeTableStatement {
    /// Analyses a whole table with no Hive options.
    #[must_use]
    pub fn new(table_name: TableName) -> Self {
        Self {
            table_name,
            partition: None,
            for_columns: false,
            cache_metadata: false,
            noscan: false,
        }
    }
}

/// `MSCK REPAIR TABLE t`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct MsckRepairTableStatement {
    /// The repaired table.
    pub table_name: TableName,
}

/// `USE schema`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UseStatement {
    /// The schema switched to.
    pub schema_name: String,
}

/// `TRUNCATE TABLE t`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct TruncateTableStatement {
    /// The truncated table.
    pub table_name: TableName,
}

/// `column = value` inside `UPDATE ... SET`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UpdateSetColumn {
    /// The assigned column, as written.
    pub column_name: String,
    /// The new value.
    pub value: Expression,
}

/// `SET a = 1, b = 2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UpdateSetClause {
    /// Assignments, in order.
    pub columns: Vec<UpdateSetColumn>,
}

/// `UPDATE t SET ... [WHERE ...] [ORDER BY ...] [LIMIT ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct UpdateStatement {
    /// Leading common table expressions, separated from the statement by a blank line.
    pub(crate) with_clause: Option<WithClause>,
    /// The updated table.
    pub table_name: TableName,
    /// The assignments.
    pub set_clause: UpdateSetClause,
    /// `WHERE`
    pub where_clause: Option<WhereClause>,
    /// `ORDER BY`
    pub order_by_clause: Option<OrderByClause>,
    /// `LIMIT`
    pub limit_clause: Option<LimitClause>,
}

impl UpdateStatement {
    /// `UPDATE table SET ...` with every optional part absent.
    #[must_use]
    pub fn new(table_name: TableName, set_clause: UpdateSetClause) -> Self {
        Self {
            with_clause: None,
            table_name,
            set_clause,
            where_clause: None,
            order_by_clause: None,
            limit_clause: None,
        }
    }
}

/// `DELETE FROM t [WHERE ...] [ORDER BY ...] [LIMIT ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct DeleteStatement {
    /// The table rows are deleted from.
    pub table_name: TableName,
    /// `WHERE`
    pub where_clause: Option<WhereClause>,
    /// `ORDER BY`
    pub order_by_clause: Option<OrderByClause>,
    /// `LIMIT`
    pub limit_clause: Option<LimitClause>,
}

/// `SHOW DATABASES`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ShowDatabasesStatement;

/// `SHOW TABLES`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ShowTablesStatement;

/// `SHOW COLUMNS FROM t [WHERE ...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ShowColumnsStatement {
    /// The inspected table.
    pub from_clause: FromClause,
    /// Filter on the listed columns.
    pub where_clause: Option<WhereClause>,
}

/// Any top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum Statement {
    /// `SELECT`
    Select(SelectStatement),
    /// `INSERT`
    Insert(InsertStatement),
    /// `CREATE TABLE`
    CreateTable(CreateTableStatement),
    /// `CREATE TABLE ... AS`
    CreateTableAs(CreateTableAsStatement),
    /// `DROP TABLE`
    DropTable(DropTableStatement),
    /// `ALTER TABLE`
    AlterTable(AlterTableStatement),
    /// `SET`
    Set(SetStatement),
    /// `ANALYZE TABLE`
    AnalyzeTable(AnalyzeTableStatement),
    /// `MSCK REPAIR TABLE`
    MsckRepairTable(MsckRepairTableStatement),
    /// `USE`
    Use(UseStatement),
    /// `TRUNCATE TABLE`
    TruncateTable(TruncateTableStatement),
    /// `UPDATE`
    Update(UpdateStatement),
    /// `DELETE`
    Delete(DeleteStatement),
    /// `SHOW DATABASES`
    ShowDatabases(ShowDatabasesStatement),
    /// `SHOW TABLES`
    ShowTables(ShowTablesStatement),
    /// `SHOW COLUMNS`
    ShowColumns(ShowColumnsStatement),
}

macro_rules! statement_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Statement {
                fn from(statement: $ty) -> Self {
                    Statement::$variant(statement)
                }
            }
        )+
    };
}

statement_from! {
    Select(SelectStatement),
    Insert(InsertStatement),
    CreateTable(CreateTableStatement),
    CreateTableAs(CreateTableAsStatement),
    DropTable(DropTableStatement),
    AlterTable(AlterTableStatement),
    Set(SetStatement),
    AnalyzeTable(AnalyzeTableStatement),
    MsckRepairTable(MsckRepairTableStatement),
    Use(UseStatement),
    TruncateTable(TruncateTableStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    ShowDatabases(ShowDatabasesStatement),
    ShowTables(ShowTablesStatement),
    ShowColumns(ShowColumnsStatement),
}

impl From<SingleSelectStatement> for Statement {
    fn from(statement: SingleSelectStatement) -> Self {
        Statement::Select(SelectStatement::Single(statement))
    }
}
