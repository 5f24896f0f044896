//! Rendering of statement nodes.

use super::{Render, SqlWriter};
use crate::ast::clause::WithClause;
use crate::ast::statement::{
    AnalyzeTableStatement, DeleteStatement, DropTableStatement, InsertSource, InsertStatement,
    MsckRepairTableStatement, SelectStatement, SetStatement, ShowColumnsStatement,
    ShowDatabasesStatement, ShowTablesStatement, SingleSelectStatement, Statement,
    TruncateTableStatement, UnionSelectStatement, UpdateSetClause, UpdateSetColumn,
    UpdateStatement, UseStatement,
};
use crate::dialect::Dialect;
use crate::errors::Error;

/// Writes a non-empty `WITH` clause followed by `separator`.
fn with_prefix(
    w: &mut SqlWriter<'_>,
    with_clause: Option<&WithClause>,
    separator: &str,
) -> Result<(), Error> {
    if let Some(with_clause) = with_clause.filter(|with| !with.is_empty()) {
        w.node(with_clause)?;
        w.push_str(separator);
    }
    Ok(())
}

/// Writes `node` on a new line when it is present.
fn line<N: Render>(w: &mut SqlWriter<'_>, node: Option<&N>) -> Result<(), Error> {
    if let Some(node) = node {
        w.push('\n');
        w.node(node)?;
    }
    Ok(())
}

/// Writes `node` after a space when it is present.
fn spaced<N: Render>(w: &mut SqlWriter<'_>, node: Option<&N>) -> Result<(), Error> {
    if let Some(node) = node {
        w.push(' ');
        w.node(node)?;
    }
    Ok(())
}

impl Render for SingleSelectStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        with_prefix(w, self.with_clause.as_ref(), "\n")?;
        w.node(&self.select_clause)?;
        line(w, self.from_clause.as_ref())?;
        for lateral_view in &self.lateral_view_clauses {
            line(w, Some(lateral_view))?;
        }
        for join in &self.join_clauses {
            line(w, Some(join))?;
        }
        line(w, self.where_clause.as_ref())?;
        line(w, self.group_by_clause.as_ref())?;
        line(w, self.having_clause.as_ref())?;
        line(w, self.order_by_clause.as_ref())?;
        if w.dialect() == Dialect::Hive {
            line(w, self.sort_by_clause.as_ref())?;
            line(w, self.distribute_by_clause.as_ref())?;
            line(w, self.cluster_by_clause.as_ref())?;
        }
        line(w, self.limit_clause.as_ref())
    }
}

impl Render for UnionSelectStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        with_prefix(w, self.with_clause.as_ref(), "\n")?;
        w.node(&self.head)?;
        for branch in &self.tail {
            w.push('\n');
            w.keyword(branch.union_type)?;
            w.push('\n');
            w.node(&branch.select)?;
        }
        Ok(())
    }
}

impl Render for SelectStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.nested(|w| match self {
            SelectStatement::Single(statement) => w.node(statement),
            SelectStatement::Union(statement) => w.node(statement),
        })
    }
}

impl Render for InsertStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        with_prefix(w, self.with_clause.as_ref(), "\n")?;
        w.keyword(self.insert_type)?;
        w.push(' ');
        if w.dialect() == Dialect::Hive {
            w.push_str("TABLE ");
        }
        w.node(&self.table_name)?;
        w.push(' ');
        if let Some(partition) = &self.partition {
            w.node(partition)?;
            w.push(' ');
        }
        if let Some(columns) = &self.columns {
            w.push('(');
            w.list(columns, ", ")?;
            w.push_str(") ");
        }
        match &self.source {
            InsertSource::Values(values) => {
                w.push_str("VALUES ");
                w.list(values, ", ")
            }
            InsertSource::Select(select) => w.node(select),
        }
    }
}

impl Render for DropTableStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(if self.if_exists {
            "DROP TABLE IF EXISTS "
        } else {
            "DROP TABLE "
        });
        w.node(&self.table_name)
    }
}

impl Render for SetStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("SET ");
        w.node(&self.config)
    }
}

impl Render for AnalyzeTableStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match w.dialect() {
            Dialect::Hive => {
                w.push_str("ANALYZE TABLE ");
                w.node(&self.table_name)?;
                spaced(w, self.partition.as_ref())?;
                w.push_str(" COMPUTE STATISTICS");
                if self.for_columns {
                    w.push_str(" FOR COLUMNS");
                }
                if self.cache_metadata {
                    w.push_str(" CACHE METADATA");
                }
                if self.noscan {
                    w.push_str(" NOSCAN");
                }
                Ok(())
            }
            Dialect::MySql => {
                w.push_str("ANALYZE TABLE ");
                w.node(&self.table_name)
            }
            _ => Err(w.unsupported("ANALYZE TABLE")),
        }
    }
}

impl Render for MsckRepairTableStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("MSCK REPAIR TABLE ");
        w.node(&self.table_name)
    }
}

impl Render for UseStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("USE ");
        w.push_str(&self.schema_name);
        Ok(())
    }
}

impl Render for TruncateTableStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("TRUNCATE TABLE ");
        w.node(&self.table_name)
    }
}

impl Render for UpdateSetColumn {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(&self.column_name);
        w.push_str(" = ");
        w.node(&self.value)
    }
}

impl Render for UpdateSetClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("SET ");
        w.list(&self.columns, ", ")
    }
}

impl Render for UpdateStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        with_prefix(w, self.with_clause.as_ref(), "\n\n")?;
        w.push_str("UPDATE ");
        w.node(&self.table_name)?;
        w.push(' ');
        w.node(&self.set_clause)?;
        spaced(w, self.where_clause.as_ref())?;
        spaced(w, self.order_by_clause.as_ref())?;
        spaced(w, self.limit_clause.as_ref())
    }
}

impl Render for DeleteStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("DELETE FROM ");
        w.node(&self.table_name)?;
        spaced(w, self.where_clause.as_ref())?;
        spaced(w, self.order_by_clause.as_ref())?;
        spaced(w, self.limit_clause.as_ref())
    }
}

impl Render for ShowDatabasesStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("SHOW DATABASES");
        Ok(())
    }
}

impl Render for ShowTablesStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("SHOW TABLES");
        Ok(())
    }
}

impl Render for ShowColumnsStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("SHOW COLUMNS ");
        w.node(&self.from_clause)?;
        spaced(w, self.where_clause.as_ref())
    }
}

impl Render for Statement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            Statement::Select(statement) => w.node(statement),
            Statement::Insert(statement) => w.node(statement),
            Statement::CreateTable(statement) => w.node(statement),
            Statement::CreateTableAs(statement) => w.node(statement),
            Statement::DropTable(statement) => w.node(statement),
            Statement::AlterTable(statement) => w.node(statement),
            Statement::Set(statement) => w.node(statement),
            Statement::AnalyzeTable(statement) => w.node(statement),
            Statement::MsckRepairTable(statement) => w.node(statement),
            Statement::Use(statement) => w.node(statement),
            Statement::TruncateTable(statement) => w.node(statement),
            Statement::Update(statement) => w.node(statement),
            Statement::Delete(statement) => w.node(statement),
            Statement::ShowDatabases(statement) => w.node(statement),
            Statement::ShowTables(statement) => w.node(statement),
            Statement::ShowColumns(statement) => w.node(statement),
        }
    }
}
