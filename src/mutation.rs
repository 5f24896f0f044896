//! Copy-with-changes operations.
//!
//! Nodes are never modified in place. Each operation here borrows a node and
//! returns a new node of the same concrete type in which only the named part
//! differs; the original stays usable and unchanged.
//!
//! # Example
//!
//! ```
//! use metasequoia_ast::{
//!     ColumnDefinition, ColumnType, CreateTableStatement, Dialect, Render, TableName,
//!     TableNameOwner,
//! };
//!
//! let original = CreateTableStatement::new(
//!     TableName::new("users"),
//!     vec![ColumnDefinition::new("id", ColumnType::new("BIGINT"))],
//! );
//! let renamed = original.set_table_name(TableName::qualified("dw", "users"));
//!
//! assert_eq!(original.table_name.table, "users");
//! assert_eq!(
//!     renamed.render(Dialect::Hive).unwrap(),
//!     "CREATE TABLE `dw.users`(\n  `id` BIGINT\n)"
//! );
//! ```

use alloc::string::String;
use core::hash::BuildHasher;

use hashbrown::HashMap;
use indexmap::IndexSet as IndexSetRaw;

use crate::ast::clause::WithClause;
use crate::ast::ddl::{
    AlterTableStatement, ColumnDefinition, CreateTableAsStatement, CreateTableStatement,
};
use crate::ast::element::{ColumnType, TableName};
use crate::ast::statement::{
    AnalyzeTableStatement, DeleteStatement, DropTableStatement, InsertStatement,
    MsckRepairTableStatement, SelectStatement, SingleSelectStatement, TruncateTableStatement,
    UnionSelectStatement, UpdateStatement,
};
use crate::errors::Error;

/// `IndexSet` alias using hashbrown's default hasher for `no_std` compatibility.
pub type IndexSet<T> = IndexSetRaw<T, hashbrown::DefaultHashBuilder>;

/// A statement that may carry a leading `WITH` clause.
pub trait WithClauseOwner: Sized {
    /// The current `WITH` clause.
    fn with_clause(&self) -> Option<&WithClause>;

    /// Returns a copy with the `WITH` clause replaced; `None` removes it.
    #[must_use]
    fn set_with_clause(&self, with_clause: Option<WithClause>) -> Self;
}

/// A statement that targets exactly one table.
pub trait TableNameOwner: Sized {
    /// The targeted table.
    fn table_name(&self) -> &TableName;

    /// Returns a copy targeting another table.
    #[must_use]
    fn set_table_name(&self, table_name: TableName) -> Self;
}

macro_rules! impl_with_clause_owner {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl WithClauseOwner for $ty {
                fn with_clause(&self) -> Option<&WithClause> {
                    self.with_clause.as_ref()
                }

                fn set_with_clause(&self, with_clause: Option<WithClause>) -> Self {
                    Self {
                        with_clause,
                        ..self.clone()
                    }
                }
            }
        )+
    };
}

macro_rules! impl_table_name_owner {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TableNameOwner for $ty {
                fn table_name(&self) -> &TableName {
                    &self.table_name
                }

                fn set_table_name(&self, table_name: TableName) -> Self {
                    Self {
                        table_name,
                        ..self.clone()
                    }
                }
            }
        )+
    };
}

impl_with_clause_owner!(
    SingleSelectStatement,
    UnionSelectStatement,
    InsertStatement,
    UpdateStatement,
);

impl_table_name_owner!(
    CreateTableStatement,
    CreateTableAsStatement,
    DropTableStatement,
    AlterTableStatement,
    AnalyzeTableStatement,
    MsckRepairTableStatement,
    TruncateTableStatement,
    InsertStatement,
    UpdateStatement,
    DeleteStatement,
);

impl WithClauseOwner for SelectStatement {
    fn with_clause(&self) -> Option<&WithClause> {
        match self {
            SelectStatement::Single(statement) => statement.with_clause(),
            SelectStatement::Union(statement) => statement.with_clause(),
        }
    }

    fn set_with_clause(&self, with_clause: Option<WithClause>) -> Self {
        match self {
            SelectStatement::Single(statement) => {
                SelectStatement::Single(statement.set_with_clause(with_clause))
            }
            SelectStatement::Union(statement) => {
                SelectStatement::Union(statement.set_with_clause(with_clause))
            }
        }
    }
}

impl CreateTableStatement {
    /// Distinct upper-cased column type names, in order of first appearance.
    ///
    /// These are exactly the keys a [`change_type`](Self::change_type) mapping must cover.
    #[must_use]
    pub fn column_type_names(&self) -> IndexSet<String> {
        self.columns
            .iter()
            .map(|column| column.column_type.name.to_uppercase())
            .collect()
    }

    /// Returns a copy in which every column type is renamed through `mapping`.
    ///
    /// The mapping is keyed by upper-cased type name. With `remove_params` the
    /// existing type parameters are dropped, otherwise they are kept.
    ///
    /// # Errors
    ///
    /// * `MutationInput` - If a column type name has no entry in the mapping. `self` is untouched.
    pub fn change_type<S: BuildHasher>(
        &self,
        mapping: &HashMap<String, String, S>,
        remove_params: bool,
    ) -> Result<Self, Error> {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                let type_name = column.column_type.name.to_uppercase();
                let Some(new_name) = mapping.get(type_name.as_str()) else {
                    log::debug!(
                        "No type mapping for {type_name} on column {}",
                        column.column_name
                    );
                    return Err(Error::MutationInput { type_name });
                };
                let params = if remove_params {
                    None
                } else {
                    column.column_type.params.clone()
                };
                Ok(ColumnDefinition {
                    column_type: ColumnType {
                        name: new_name.clone(),
                        params,
                    },
                    ..column.clone()
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self {
            columns,
            ..self.clone()
        })
    }

    /// Returns a copy with `column` appended to the column list.
    #[must_use]
    pub fn append_column(&self, column: ColumnDefinition) -> Self {
        let mut statement = self.clone();
        statement.columns.push(column);
        statement
    }

    /// Returns a copy with `column` appended to the `PARTITIONED BY` list.
    #[must_use]
    pub fn append_partition_by_column(&self, column: ColumnDefinition) -> Self {
        let mut statement = self.clone();
        statement.partitioned_by.push(column);
        statement
    }
}
