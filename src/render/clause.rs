//! Rendering of clause nodes.

use super::{Render, SqlWriter};
use crate::ast::clause::{
    ClusterByClause, DistributeByClause, FromClause, FromTable, GroupByClause, GroupingSets,
    HavingClause, JoinClause, JoinRule, LateralViewClause, LimitClause, OrderByClause,
    OrderByColumn, SelectClause, SelectColumn, SortByClause, TableSource, WhereClause, WithClause,
    WithTable,
};
use crate::catalog::OrderType;
use crate::errors::Error;

impl Render for SelectColumn {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.node(&self.value)?;
        if let Some(alias) = &self.alias {
            w.push(' ');
            w.node(alias)?;
        }
        Ok(())
    }
}

impl Render for SelectClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(if self.distinct { "SELECT DISTINCT " } else { "SELECT " });
        w.list(&self.columns, ", ")
    }
}

impl Render for TableSource {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            TableSource::Table(name) => w.node(name),
            TableSource::SubQuery(subquery) => w.node(subquery),
        }
    }
}

impl Render for FromTable {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.node(&self.source)?;
        if let Some(alias) = &self.alias {
            w.push(' ');
            w.node(alias)?;
        }
        Ok(())
    }
}

impl Render for FromClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("FROM ");
        w.list(&self.tables, ", ")
    }
}

impl Render for LateralViewClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(if self.outer {
            "LATERAL VIEW OUTER "
        } else {
            "LATERAL VIEW "
        });
        w.node(&self.function)?;
        w.push(' ');
        w.push_str(&self.view_name);
        w.push(' ');
        w.node(&self.alias)
    }
}

impl Render for JoinRule {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        match self {
            JoinRule::On(condition) => {
                w.push_str("ON ");
                w.node(condition)
            }
            JoinRule::Using(function) => w.node(function),
        }
    }
}

impl Render for JoinClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.keyword(self.join_type)?;
        w.push(' ');
        w.node(&self.table)?;
        if let Some(rule) = &self.rule {
            w.push(' ');
            w.node(rule)?;
        }
        Ok(())
    }
}

impl Render for WhereClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("WHERE ");
        w.node(&self.condition)
    }
}

impl Render for HavingClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("HAVING ");
        w.node(&self.condition)
    }
}

impl Render for GroupingSets {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("GROUPING SETS (");
        for (i, set) in self.sets.iter().enumerate() {
            if i > 0 {
                w.push_str(", ");
            }
            if set.len() == 1 {
                w.list(set, ", ")?;
            } else {
                w.push('(');
                w.list(set, ", ")?;
                w.push(')');
            }
        }
        w.push(')');
        Ok(())
    }
}

impl Render for GroupByClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("GROUP BY");
        if !self.columns.is_empty() {
            w.push(' ');
            w.list(&self.columns, ", ")?;
        }
        if let Some(grouping_sets) = &self.grouping_sets {
            w.push(' ');
            w.node(grouping_sets)?;
        }
        if self.with_cube {
            w.push_str(" WITH CUBE");
        }
        if self.with_rollup {
            w.push_str(" WITH ROLLUP");
        }
        Ok(())
    }
}

impl Render for OrderByColumn {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.node(&self.column)?;
        if self.order == OrderType::Desc {
            w.push(' ');
            w.keyword(self.order)?;
        }
        if self.nulls_first {
            w.push_str(" NULLS FIRST");
        }
        if self.nulls_last {
            w.push_str(" NULLS LAST");
        }
        Ok(())
    }
}

impl Render for OrderByClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("ORDER BY ");
        w.list(&self.columns, ", ")
    }
}

impl Render for SortByClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("SORT BY ");
        w.list(&self.columns, ", ")
    }
}

impl Render for DistributeByClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("DISTRIBUTE BY ");
        w.list(&self.columns, ", ")
    }
}

impl Render for ClusterByClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("CLUSTER BY ");
        w.list(&self.columns, ", ")
    }
}

impl Render for LimitClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str("LIMIT ");
        w.push_display(self.offset.unwrap_or(0));
        w.push_str(", ");
        w.push_display(self.limit);
        Ok(())
    }
}

impl Render for WithTable {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        w.push_str(&self.name);
        w.push_str(" AS (");
        w.node(&self.statement)?;
        w.push(')');
        Ok(())
    }
}

impl Render for WithClause {
    fn render_into(&self, w: &mut SqlWriter<'_>) -> Result<(), Error> {
        if self.is_empty() {
            return Ok(());
        }
        w.push_str("WITH ");
        w.list(&self.tables, ", \n")
    }
}
