//! Rendering of table definition nodes.
//!
//! `CREATE TABLE` is the one statement with a per-dialect layout rather than
//! per-dialect fragments: MySQL and Hive each get their own function and every
//! other dialect is rejected.

use alloc::vec::Vec;

use super::{Render, SqlWriter};
use crate::ast::ddl::{
    AlterAction, AlterTableStatement, AlterTarget, ColumnDefinition, CreateTableAsStatement,
    CreateTableStatement, ForeignKey, GeneratedColumn, IndexColumn, IndexDeclaration,
};
use crate::dialect::Dialect;
use crate::errors::Error;

impl Render for GeneratedColumn {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("GENERATED ALWAYS AS (");
        w.node(&self.expression)?;
        w.push_str(") ");
        w.keyword(self.save_mode)
    }
}

impl Render for ColumnDefinition {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push('`');
        w.push_str(&self.column_name);
        w.push_str("` ");
        w.node(&self.column_type)?;
        if w.dialect() == Dialect::MySql {
            if self.unsigned {
                w.push_str(" UNSIGNED");
            }
            if self.zerofill {
                w.push_str(" ZEROFILL");
            }
            if let Some(character_set) = &self.character_set {
                w.push_str(" CHARACTER SET ");
                w.push_str(character_set);
            }
            if let Some(collate) = &self.collate {
                w.push_str(" COLLATE ");
                w.push_str(collate);
            }
            if let Some(generated) = &self.generated {
                w.push(' ');
                w.node(generated)?;
            }
            if self.nullable {
                w.push_str(" NULL");
            }
            if self.not_null {
                w.push_str(" NOT NULL");
            }
            if self.auto_increment {
                w.push_str(" AUTO_INCREMENT");
            }
            if let Some(default) = &self.default {
                w.push_str(" DEFAULT ");
                w.node(default)?;
            }
            if let Some(on_update) = &self.on_update {
                w.push_str(" ON UPDATE ");
                w.node(on_update)?;
            }
        }
        if let Some(comment) = &self.comment {
            w.push_str(" COMMENT ");
            w.push_str(comment);
        }
        Ok(())
    }
}

impl Render for IndexColumn {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push('`');
        w.push_str(&self.name);
        w.push('`');
        if let Some(max_length) = self.max_length {
            w.push('(');
            w.push_display(max_length);
            w.push(')');
        }
        Ok(())
    }
}

impl Render for IndexDeclaration {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(self.kind.as_str());
        if let Some(name) = &self.name {
            w.push(' ');
            w.push_str(name);
        }
        w.push_str(" (");
        w.list(&self.columns, ",")?;
        w.push(')');
        if let Some(using) = &self.using {
            w.push_str(" USING ");
            w.push_str(using);
        }
        if let Some(comment) = &self.comment {
            w.push_str(" COMMENT ");
            w.push_str(comment);
        }
        if let Some(key_block_size) = self.key_block_size {
            w.push_str(" KEY_BLOCK_SIZE=");
            w.push_display(key_block_size);
        }
        Ok(())
    }
}

impl Render for ForeignKey {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("CONSTRAINT ");
        w.push_str(&self.constraint_name);
        w.push_str(" FOREIGN KEY (");
        w.push_str(&self.columns.join(", "));
        w.push_str(") REFERENCES ");
        w.push_str(&self.referenced_table);
        w.push_str(" (");
        w.push_str(&self.referenced_columns.join(", "));
        w.push(')');
        if let Some(on_delete) = &self.on_delete {
            w.push_str(" ON DELETE ");
            w.push_str(on_delete);
        }
        if let Some(on_update) = &self.on_update {
            // The ON UPDATE action repeats the ON DELETE action when one is set.
            w.push_str(" ON UPDATE ");
            w.push_str(self.on_delete.as_deref().unwrap_or(on_update));
        }
        Ok(())
    }
}

impl Render for AlterTarget {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            AlterTarget::Column(column) => w.node(column),
            AlterTarget::Index(index) => w.node(index),
            AlterTarget::ForeignKey(foreign_key) => w.node(foreign_key),
        }
    }
}

impl Render for AlterAction {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            AlterAction::AddPartition {
                if_not_exists,
                partition,
            } => {
                // Rendered with the DROP keyword.
                w.push_str(if *if_not_exists {
                    "DROP IF NOT EXISTS "
                } else {
                    "DROP "
                });
                w.node(partition)
            }
            AlterAction::Add(target) => {
                w.push_str("ADD ");
                w.node(target)
            }
            AlterAction::Modify(target) => {
                w.push_str("MODIFY ");
                w.node(target)
            }
            AlterAction::Change { from_column, to } => {
                w.push_str("CHANGE ");
                w.push_str(from_column);
                w.push(' ');
                w.node(to)
            }
            AlterAction::RenameColumn {
                from_column,
                to_column,
            } => {
                w.push_str("RENAME COLUMN ");
                w.push_str(from_column);
                w.push_str(" TO ");
                w.push_str(to_column);
                Ok(())
            }
            AlterAction::DropColumn { column } => {
                w.push_str("DROP COLUMN ");
                w.push_str(column);
                Ok(())
            }
            AlterAction::DropPartition {
                if_exists,
                partition,
            } => {
                w.push_str(if *if_exists { "DROP IF EXISTS " } else { "DROP " });
                w.node(partition)
            }
        }
    }
}

impl Render for AlterTableStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("ALTER TABLE ");
        w.node(&self.table_name)?;
        w.push('\n');
        w.list(&self.actions, ",\n")
    }
}

/// Writes `CREATE TABLE [IF NOT EXISTS] name`.
fn create_table_title(w: &mut SqlWriter<'_>, statement: &CreateTableStatement) -> Result<(), Error> {
    w.push_str(if statement.if_not_exists {
        "CREATE TABLE IF NOT EXISTS "
    } else {
        "CREATE TABLE "
    });
    w.node(&statement.table_name)
}

/// Writes one indented entry per line, separated by commas.
fn indented_lines(w: &mut SqlWriter<'_>, entries: &[&dyn Render]) -> Result<(), Error> {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            w.push_str(",\n");
        }
        w.indent();
        entry.render_into(w)?;
    }
    Ok(())
}

fn table_option(w: &mut SqlWriter<'_>, prefix: &str, value: Option<&str>) {
    if let Some(value) = value {
        w.push_str(prefix);
        w.push_str(value);
    }
}

fn create_table_mysql(w: &mut SqlWriter<'_>, statement: &CreateTableStatement) -> Result<(), Error> {
    create_table_title(w, statement)?;
    w.push_str(" (\n");
    let mut entries: Vec<&dyn Render> = Vec::new();
    entries.extend(statement.columns.iter().map(|column| column as &dyn Render));
    entries.extend(statement.primary_key.iter().map(|key| key as &dyn Render));
    entries.extend(statement.unique_keys.iter().map(|key| key as &dyn Render));
    entries.extend(statement.keys.iter().map(|key| key as &dyn Render));
    entries.extend(statement.fulltext_keys.iter().map(|key| key as &dyn Render));
    entries.extend(statement.foreign_keys.iter().map(|key| key as &dyn Render));
    indented_lines(w, &entries)?;
    w.push_str("\n)");

    table_option(w, " ENGINE=", statement.engine.as_deref());
    if let Some(auto_increment) = statement.auto_increment {
        w.push_str(" AUTO_INCREMENT=");
        w.push_display(auto_increment);
    }
    table_option(w, " DEFAULT CHARSET=", statement.default_charset.as_deref());
    table_option(w, " COLLATE=", statement.collate.as_deref());
    table_option(w, " ROW_FORMAT=", statement.row_format.as_deref());
    table_option(w, " STATS_PERSISTENT=", statement.stats_persistent.as_deref());
    table_option(w, " COMMENT=", statement.comment.as_deref());
    Ok(())
}

fn create_table_hive(w: &mut SqlWriter<'_>, statement: &CreateTableStatement) -> Result<(), Error> {
    create_table_title(w, statement)?;
    w.push_str("(\n");
    let entries: Vec<&dyn Render> = statement
        .columns
        .iter()
        .map(|column| column as &dyn Render)
        .collect();
    indented_lines(w, &entries)?;
    w.push_str("\n)");

    table_option(w, " COMMENT ", statement.comment.as_deref());
    if !statement.partitioned_by.is_empty() {
        w.push_str(" PARTITIONED BY (");
        w.list(&statement.partitioned_by, ", ")?;
        w.push(')');
    }
    table_option(w, " ROW FORMAT SERDE ", statement.row_format_serde.as_deref());
    table_option(
        w,
        " ROW FORMAT DELIMITED FIELDS TERMINATED BY ",
        statement.row_format_delimited_fields_terminated_by.as_deref(),
    );
    table_option(
        w,
        " STORED AS INPUTFORMAT ",
        statement.stored_as_inputformat.as_deref(),
    );
    if statement.stored_as_textfile {
        w.push_str(" STORED AS TEXTFILE");
    }
    table_option(w, " OUTPUTFORMAT ", statement.outputformat.as_deref());
    table_option(w, " LOCATION ", statement.location.as_deref());
    if !statement.tblproperties.is_empty() {
        w.push_str(" TBLPROPERTIES (");
        w.list(&statement.tblproperties, ", ")?;
        w.push(')');
    }
    Ok(())
}

impl Render for CreateTableStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match w.dialect() {
            Dialect::MySql => create_table_mysql(w, self),
            Dialect::Hive => create_table_hive(w, self),
            _ => Err(w.unrecognized("CREATE TABLE")),
        }
    }
}

impl Render for CreateTableAsStatement {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("CREATE TABLE ");
        w.node(&self.table_name)?;
        w.push_str(" AS ");
        w.node(&self.select_statement)
    }
}
