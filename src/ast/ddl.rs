//! Table definition nodes: `CREATE TABLE`, `ALTER TABLE` and their elements.

use alloc::string::String;
use alloc::vec::Vec;

use crate::ast::element::{ColumnType, ConfigString, PartitionExpression, TableName};
use crate::ast::expression::Expression;
use crate::ast::statement::SelectStatement;
use crate::catalog::GeneratedColumnSaveMode;

/// `GENERATED ALWAYS AS (expression) VIRTUAL|STORED`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct GeneratedColumn {
    /// The generating expression.
    pub expression: Expression,
    /// Whether the value is computed on read or stored.
    pub save_mode: GeneratedColumnSaveMode,
}

/// A column declaration inside `CREATE TABLE` or `ALTER TABLE`.
///
/// Only the name, the type and the comment are rendered outside MySQL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ColumnDefinition {
    /// Column name, without quotes.
    pub column_name: String,
    /// Declared type.
    pub column_type: ColumnType,
    /// `UNSIGNED`
    pub unsigned: bool,
    /// `ZEROFILL`
    pub zerofill: bool,
    /// `CHARACTER SET name`
    pub character_set: Option<String>,
    /// `COLLATE name`
    pub collate: Option<String>,
    /// `GENERATED ALWAYS AS ...`
    pub generated: Option<GeneratedColumn>,
    /// An explicit `NULL`.
    pub nullable: bool,
    /// `NOT NULL`
    pub not_null: bool,
    /// `AUTO_INCREMENT`
    pub auto_increment: bool,
    /// `DEFAULT value`
    pub default: Option<Expression>,
    /// `ON UPDATE value`
    pub on_update: Option<Expression>,
    /// `COMMENT text`, with the text kept verbatim including quotes.
    pub comment: Option<String>,
}

impl ColumnDefinition {
    /// A column with no attributes besides its type.
    #[must_use]
    pub fn new(column_name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            column_name: column_name.into(),
            column_type,
            unsigned: false,
            zerofill: false,
            character_set: None,
            collate: None,
            generated: None,
            nullable: false,
            not_null: false,
            auto_increment: false,
            default: None,
            on_update: None,
            comment: None,
        }
    }
}

/// A column of an index, with an optional prefix length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct IndexColumn {
    /// Column name, without quotes.
    pub name: String,
    /// Indexed prefix length.
    pub max_length: Option<u32>,
}

impl IndexColumn {
    /// Indexes the whole column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_length: None,
        }
    }
}

/// The kind of an index declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum IndexKind {
    /// `PRIMARY KEY`
    Primary,
    /// `UNIQUE KEY`
    Unique,
    /// `KEY`
    Normal,
    /// `FULLTEXT KEY`
    Fulltext,
}

impl IndexKind {
    /// The introducing keywords.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexKind::Primary => "PRIMARY KEY",
            IndexKind::Unique => "UNIQUE KEY",
            IndexKind::Normal => "KEY",
            IndexKind::Fulltext => "FULLTEXT KEY",
        }
    }
}

/// `KIND [name] (columns) [USING ...] [COMMENT ...] [KEY_BLOCK_SIZE=n]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct IndexDeclaration {
    /// The kind of index.
    pub kind: IndexKind,
    /// Index name.
    pub name: Option<String>,
    /// Indexed columns, in order.
    pub columns: Vec<IndexColumn>,
    /// Index method, e.g. `BTREE`.
    pub using: Option<String>,
    /// Comment text, verbatim.
    pub comment: Option<String>,
    /// `KEY_BLOCK_SIZE` option.
    pub key_block_size: Option<u64>,
}

impl IndexDeclaration {
    /// An unnamed index with no options.
    #[must_use]
    pub fn new(kind: IndexKind, columns: Vec<IndexColumn>) -> Self {
        Self {
            kind,
            name: None,
            columns,
            using: None,
            comment: None,
            key_block_size: None,
        }
    }
}

/// `CONSTRAINT name FOREIGN KEY (a) REFERENCES t (b) [ON DELETE ...] [ON UPDATE ...]`
///
/// When `on_update` is present the `ON UPDATE` action repeats the
/// `ON DELETE` action if there is one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct ForeignKey {
    /// Constraint name.
    pub constraint_name: String,
    /// Referencing columns.
    pub columns: Vec<String>,
    /// Referenced table.
    pub referenced_table: String,
    /// Referenced columns.
    pub referenced_columns: Vec<String>,
    /// `ON DELETE` action.
    pub on_delete: Option<String>,
    /// `ON UPDATE` action.
    pub on_update: Option<String>,
}

/// What an `ALTER TABLE` `ADD`, `MODIFY` or `CHANGE` action declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum AlterTarget {
    /// A column.
    Column(ColumnDefinition),
    /// An index.
    Index(IndexDeclaration),
    /// A foreign key.
    ForeignKey(ForeignKey),
}

/// One action of an `ALTER TABLE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum AlterAction {
    /// Adds a partition. Renders with the `DROP` keyword: `DROP [IF NOT EXISTS] PARTITION (...)`.
    AddPartition {
        /// Whether `IF NOT EXISTS` is present.
        if_not_exists: bool,
        /// The partition.
        partition: PartitionExpression,
    },
    /// `ADD target`
    Add(AlterTarget),
    /// `MODIFY target`
    Modify(AlterTarget),
    /// `CHANGE old_name target`
    Change {
        /// Current column name, as written.
        from_column: String,
        /// The new declaration.
        to: AlterTarget,
    },
    /// `RENAME COLUMN a TO b`
    RenameColumn {
        /// Current column name.
        from_column: String,
        /// New column name.
        to_column: String,
    },
    /// `DROP COLUMN c`
    DropColumn {
        /// The dropped column.
        column: String,
    },
    /// `DROP [IF EXISTS] PARTITION (...)`
    DropPartition {
        /// Whether `IF EXISTS` is present.
        if_exists: bool,
        /// The partition.
        partition: PartitionExpression,
    },
}

/// `ALTER TABLE t` followed by its actions, one per line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct AlterTableStatement {
    /// The altered table.
    pub table_name: TableName,
    /// Actions, in order.
    pub actions: Vec<AlterAction>,
}

/// `CREATE TABLE`
///
/// The statement has one layout for MySQL and another for Hive; every other
/// dialect fails to render it. Key declarations and MySQL table options are
/// ignored by the Hive layout, and the Hive storage options by the MySQL one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CreateTableStatement {
    /// The created table.
    pub table_name: TableName,
    /// Whether `IF NOT EXISTS` is present.
    pub if_not_exists: bool,
    /// Column declarations, in order.
    pub columns: Vec<ColumnDefinition>,
    /// `PRIMARY KEY` (MySQL)
    pub primary_key: Option<IndexDeclaration>,
    /// `UNIQUE KEY` declarations (MySQL)
    pub unique_keys: Vec<IndexDeclaration>,
    /// `KEY` declarations (MySQL)
    pub keys: Vec<IndexDeclaration>,
    /// `FULLTEXT KEY` declarations (MySQL)
    pub fulltext_keys: Vec<IndexDeclaration>,
    /// Foreign keys (MySQL)
    pub foreign_keys: Vec<ForeignKey>,
    /// `PARTITIONED BY` columns (Hive)
    pub partitioned_by: Vec<ColumnDefinition>,
    /// Table comment, verbatim.
    pub comment: Option<String>,
    /// `ENGINE=` (MySQL)
    pub engine: Option<String>,
    /// `AUTO_INCREMENT=` (MySQL)
    pub auto_increment: Option<u64>,
    /// `DEFAULT CHARSET=` (MySQL)
    pub default_charset: Option<String>,
    /// `COLLATE=` (MySQL)
    pub collate: Option<String>,
    /// `ROW_FORMAT=` (MySQL)
    pub row_format: Option<String>,
    /// `STATS_PERSISTENT=` (MySQL)
    pub stats_persistent: Option<String>,
    /// `ROW FORMAT SERDE` (Hive)
    pub row_format_serde: Option<String>,
    /// `ROW FORMAT DELIMITED FIELDS TERMINATED BY` (Hive)
    pub row_format_delimited_fields_terminated_by: Option<String>,
    /// `STORED AS INPUTFORMAT` (Hive)
    pub stored_as_inputformat: Option<String>,
    /// `STORED AS TEXTFILE` (Hive)
    pub stored_as_textfile: bool,
    /// `OUTPUTFORMAT` (Hive)
    pub outputformat: Option<String>,
    /// `LOCATION` (Hive)
    pub location: Option<String>,
    /// `TBLPROPERTIES` (Hive)
    pub tblproperties: Vec<ConfigString>,
}

impl CreateTableStatement {
    /// A table with the given columns and nothing else.
    #[must_use]
    pub fn new(table_name: TableName, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            table_name,
            if_not_exists: false,
            columns,
            primary_key: None,
            unique_keys: Vec::new(),
            keys: Vec::new(),
            fulltext_keys: Vec::new(),
            foreign_keys: Vec::new(),
            partitioned_by: Vec::new(),
            comment: None,
            engine: None,
            auto_increment: None,
            default_charset: None,
            collate: None,
            row_format: None,
            stats_persistent: None,
            row_format_serde: None,
            row_format_delimited_fields_terminated_by: None,
            stored_as_inputformat: None,
            stored_as_textfile: false,
            outputformat: None,
            location: None,
            tblproperties: Vec::new(),
        }
    }
}

/// `CREATE TABLE t AS query`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct CreateTableAsStatement {
    /// The created table.
    pub table_name: TableName,
    /// The query populating it.
    pub select_statement: SelectStatement,
}
