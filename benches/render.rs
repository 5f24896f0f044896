//! Benchmark measuring the time to render syntax trees as SQL text.
//!
//! Scenarios:
//! - **select**: a join query with every common clause, per dialect
//! - **or_chain**: a long boolean chain close to the default nesting bound
//! - **create_table**: a wide `CREATE TABLE` under MySQL and Hive

use criterion::{Criterion, criterion_group, criterion_main};
use metasequoia_ast::{
    ColumnDefinition, ColumnType, CompareOperator, CreateTableStatement, Dialect, Expression,
    FromClause, FromTable, GroupByClause, JoinClause, JoinRule, JoinType, LimitClause,
    OrderByClause, OrderByColumn, Render, SelectClause, SelectColumn, SingleSelectStatement,
    TableName, WhereClause,
};
use std::hint::black_box;

fn join_query() -> SingleSelectStatement {
    let columns = (0..16)
        .map(|i| SelectColumn::new(Expression::column(format!("c{i}"))))
        .collect();
    SingleSelectStatement::new(SelectClause::new(columns))
        .with_from(FromClause {
            tables: vec![FromTable::table(TableName::new("orders")).with_alias("o")],
        })
        .with_join(JoinClause {
            join_type: JoinType::LeftJoin,
            table: FromTable::table(TableName::qualified("dw", "users")).with_alias("u"),
            rule: Some(JoinRule::On(Expression::compare(
                Expression::column("user_id"),
                CompareOperator::Equal,
                Expression::column("id"),
            ))),
        })
        .with_where(WhereClause {
            condition: Expression::and(
                Expression::compare(
                    Expression::column("amount"),
                    CompareOperator::Greater,
                    Expression::literal("100"),
                ),
                Expression::compare(
                    Expression::column("status"),
                    CompareOperator::Equal,
                    Expression::literal("'paid'"),
                ),
            ),
        })
        .with_group_by(GroupByClause::new(vec![Expression::column("c0")]))
        .with_order_by(OrderByClause {
            columns: vec![OrderByColumn::desc(Expression::column("c1"))],
        })
        .with_limit(LimitClause::new(100))
}

fn or_chain(depth: usize) -> Expression {
    let mut expression = Expression::column("c0");
    for i in 1..depth {
        expression = Expression::or(expression, Expression::column(format!("c{i}")));
    }
    expression
}

fn wide_table() -> CreateTableStatement {
    let columns = (0..64)
        .map(|i| {
            ColumnDefinition::new(
                format!("col_{i}"),
                ColumnType::with_params("VARCHAR", vec![Expression::literal("255")]),
            )
        })
        .collect();
    CreateTableStatement::new(TableName::new("wide"), columns)
}

fn bench_select(c: &mut Criterion) {
    let query = join_query();
    let mut group = c.benchmark_group("select");
    for dialect in [Dialect::MySql, Dialect::Hive, Dialect::Db2] {
        group.bench_function(dialect.name(), |b| {
            b.iter(|| black_box(&query).render(black_box(dialect)));
        });
    }
    group.finish();
}

fn bench_or_chain(c: &mut Criterion) {
    let chain = or_chain(200);
    c.bench_function("or_chain", |b| {
        b.iter(|| black_box(&chain).render(Dialect::Default));
    });
}

fn bench_create_table(c: &mut Criterion) {
    let table = wide_table();
    let mut group = c.benchmark_group("create_table");
    for dialect in [Dialect::MySql, Dialect::Hive] {
        group.bench_function(dialect.name(), |b| {
            b.iter(|| black_box(&table).render(black_box(dialect)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select, bench_or_chain, bench_create_table);
criterion_main!(benches);
