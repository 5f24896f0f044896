//! Rendering of element nodes.

use super::{Render, SqlWriter};
use crate::ast::element::{
    Alias, CastType, ColumnType, ConfigString, FunctionName, MultiAlias, PartitionExpression,
    TableName,
};
use crate::dialect::Dialect;
use crate::errors::Error;

impl Render for TableName {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        // Schema and table share a single pair of back-quotes.
        w.push('`');
        if let Some(schema) = &self.schema {
            w.push_str(schema);
            w.push('.');
        }
        w.push_str(&self.table);
        w.push('`');
        Ok(())
    }
}

impl Render for FunctionName {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        if let Some(schema) = &self.schema {
            w.push('`');
            w.push_str(schema);
            w.push_str("`.");
        }
        w.push_str(&self.name);
        Ok(())
    }
}

impl Render for Alias {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("AS ");
        w.push_str(&self.name);
        Ok(())
    }
}

impl Render for MultiAlias {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("AS ");
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                w.push_str(", ");
            }
            w.push_str(name);
        }
        Ok(())
    }
}

impl Render for CastType {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        if self.signed {
            w.push_str("SIGNED ");
        }
        w.keyword(self.data_type)?;
        if let Some(params) = &self.params {
            w.push_str(" (");
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    w.push_str(", ");
                }
                w.push_display(param);
            }
            w.push(')');
        }
        Ok(())
    }
}

impl Render for ConfigString {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(&self.name);
        w.push('=');
        w.push_str(&self.value);
        Ok(())
    }
}

impl Render for PartitionExpression {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("PARTITION (");
        w.list(&self.partitions, ", ")?;
        w.push(')');
        Ok(())
    }
}

impl Render for ColumnType {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(&self.name);
        let Some(params) = &self.params else {
            return Ok(());
        };
        if w.dialect() == Dialect::Hive && !self.hive_keeps_params() {
            return Ok(());
        }
        // MySQL exports type parameters without a space after the comma.
        w.push('(');
        w.list(params, ",")?;
        w.push(')');
        Ok(())
    }
}
