//! The syntax tree node model.
//!
//! Nodes are plain immutable values: they compare and hash by all of their
//! fields, own their children outright and never point back at a parent. A
//! node is "changed" by building a new one, either with struct update syntax
//! or with the copy-with-changes methods in [`crate::mutation`].
//!
//! The tree is split into four layers:
//! - statements ([`statement`], [`ddl`]): top-level executable nodes;
//! - clauses ([`clause`]): keyword-introduced parts of a statement;
//! - expressions ([`expression`]): recursively composed, precedence-tiered values;
//! - elements ([`element`]): fixed building blocks such as table names and types.

pub mod clause;
pub mod ddl;
pub mod element;
pub mod expression;
pub mod literal;
pub mod statement;

pub use clause::{
    ClusterByClause, DistributeByClause, FromClause, FromTable, GroupByClause, GroupingSets,
    HavingClause, JoinClause, JoinRule, LateralViewClause, LimitClause, OrderByClause,
    OrderByColumn, SelectClause, SelectColumn, SortByClause, TableSource, WhereClause, WithClause,
    WithTable,
};
pub use ddl::{
    AlterAction, AlterTableStatement, AlterTarget, ColumnDefinition, CreateTableAsStatement,
    CreateTableStatement, ForeignKey, GeneratedColumn, IndexColumn, IndexDeclaration, IndexKind,
};
pub use element::{
    Alias, CastType, ColumnType, ConfigString, FunctionName, MultiAlias, PartitionExpression,
    TableName,
};
pub use expression::{
    AggregateFunction, BetweenExpression, CaseConditionExpression, CaseValueExpression, CaseWhen,
    CastFunction, ColumnName, ComparisonExpression, ComputeExpression, ConditionKeyword,
    ExistsExpression, Expression, ExtractFunction, Function, IndexExpression,
    KeywordConditionExpression, LogicalExpression, NormalFunction, PrecedenceTier, SubQuery,
    SubValue, UnaryExpression, WindowBound, WindowExpression, WindowFrame, Wildcard,
};
pub use literal::{Literal, LiteralValue};
pub use statement::{
    AnalyzeTableStatement, DeleteStatement, DropTableStatement, InsertSource, InsertStatement,
    MsckRepairTableStatement, SelectStatement, SetStatement, ShowColumnsStatement,
    ShowDatabasesStatement, ShowTablesStatement, SingleSelectStatement, Statement,
    TruncateTableStatement, UnionBranch, UnionSelectStatement, UpdateSetClause, UpdateSetColumn,
    UpdateStatement, UseStatement,
};
