//! Copy-with-changes operations on statements.
//!
//! This module tests:
//! - Column type rewrites and their failure mode
//! - Table name and WITH clause replacement across statement kinds
//! - Originals are left untouched by every operation

use hashbrown::HashMap;
use metasequoia_ast::{
    ColumnDefinition, ColumnType, CreateTableStatement, DeleteStatement, Dialect,
    DropTableStatement, Error, Expression, FromClause, InsertSource, InsertStatement, Render,
    SelectClause, SelectColumn, SelectStatement, SingleSelectStatement, TableName, TableNameOwner,
    TruncateTableStatement, UpdateSetClause, UpdateSetColumn, UpdateStatement, WithClause,
    WithClauseOwner, WithTable,
};

fn users() -> CreateTableStatement {
    CreateTableStatement::new(
        TableName::new("users"),
        vec![
            ColumnDefinition::new(
                "id",
                ColumnType::with_params("int", vec![Expression::literal("11")]),
            ),
            ColumnDefinition::new(
                "name",
                ColumnType::with_params("VARCHAR", vec![Expression::literal("64")]),
            ),
            ColumnDefinition::new("created", ColumnType::new("DATETIME")),
        ],
    )
}

fn mysql_to_hive() -> HashMap<String, String> {
    let mut mapping = HashMap::new();
    mapping.insert("INT".to_owned(), "BIGINT".to_owned());
    mapping.insert("VARCHAR".to_owned(), "STRING".to_owned());
    mapping.insert("DATETIME".to_owned(), "TIMESTAMP".to_owned());
    mapping
}

#[test]
fn test_change_type_then_render() {
    let hive = users().change_type(&mysql_to_hive(), true).unwrap();
    assert_eq!(
        hive.render(Dialect::Hive).unwrap(),
        "CREATE TABLE `users`(\n  `id` BIGINT,\n  `name` STRING,\n  `created` TIMESTAMP\n)"
    );
}

#[test]
fn test_change_type_missing_mapping_leaves_original() {
    let original = users();
    let before = original.render(Dialect::MySql).unwrap();
    let mut mapping = mysql_to_hive();
    mapping.remove("DATETIME");

    let err = original.change_type(&mapping, false).unwrap_err();
    assert_eq!(
        err,
        Error::MutationInput {
            type_name: "DATETIME".into()
        }
    );
    assert_eq!(original, users());
    assert_eq!(original.render(Dialect::MySql).unwrap(), before);
}

#[test]
fn test_mapping_keys_match_column_type_names() {
    let names: Vec<String> = users().column_type_names().into_iter().collect();
    assert_eq!(names, ["INT", "VARCHAR", "DATETIME"]);
    let mapping = mysql_to_hive();
    assert!(names.iter().all(|name| mapping.contains_key(name)));
}

#[test]
fn test_append_partition_column() {
    let partitioned = users()
        .append_partition_by_column(ColumnDefinition::new("dt", ColumnType::new("STRING")));
    let sql = partitioned.render(Dialect::Hive).unwrap();
    assert!(sql.ends_with(") PARTITIONED BY (`dt` STRING)"));
    assert_eq!(partitioned.columns, users().columns);
}

#[test]
fn test_set_table_name_on_statements() {
    let target = TableName::qualified("dw", "events");

    let drop = DropTableStatement {
        if_exists: true,
        table_name: TableName::new("events"),
    };
    assert_eq!(
        drop.set_table_name(target.clone()).render(Dialect::Default).unwrap(),
        "DROP TABLE IF EXISTS `dw.events`"
    );

    let truncate = TruncateTableStatement {
        table_name: TableName::new("events"),
    };
    assert_eq!(truncate.set_table_name(target.clone()).table_name(), &target);

    let delete = DeleteStatement {
        table_name: TableName::new("events"),
        where_clause: None,
        order_by_clause: None,
        limit_clause: None,
    };
    let moved = delete.set_table_name(target.clone());
    assert_eq!(moved.table_name(), &target);
    assert_eq!(delete.table_name(), &TableName::new("events"));
}

#[test]
fn test_set_with_clause_on_insert() {
    let select = SingleSelectStatement::new(SelectClause::new(vec![SelectColumn::new(
        Expression::column("a"),
    )]))
    .with_from(FromClause::table(TableName::new("src")));
    let insert = InsertStatement::new(
        TableName::new("dst"),
        InsertSource::Select(SelectStatement::from(select.clone())),
    );
    let with = WithClause {
        tables: vec![WithTable::new("src", select.into())],
    };

    let with_insert = insert.set_with_clause(Some(with.clone()));
    assert_eq!(with_insert.with_clause(), Some(&with));
    assert_eq!(insert.with_clause(), None);
    assert!(
        with_insert
            .render(Dialect::MySql)
            .unwrap()
            .starts_with("WITH src AS (")
    );
    assert_eq!(with_insert.set_with_clause(None), insert);
}

#[test]
fn test_set_with_clause_is_the_only_way_to_attach_ctes() {
    let source = SingleSelectStatement::new(SelectClause::new(vec![SelectColumn::new(
        Expression::column("a"),
    )]))
    .with_from(FromClause::table(TableName::new("src")));
    let update = UpdateStatement::new(
        TableName::new("t1"),
        UpdateSetClause {
            columns: vec![UpdateSetColumn {
                column_name: "a".into(),
                value: Expression::literal("1"),
            }],
        },
    );
    assert_eq!(update.with_clause(), None);
    assert_eq!(update.render(Dialect::MySql).unwrap(), "UPDATE `t1` SET a = 1");

    let with = WithClause {
        tables: vec![WithTable::new("src", source.clone().into())],
    };
    let with_update = update.set_with_clause(Some(with.clone()));
    assert_eq!(with_update.with_clause(), Some(&with));
    assert_eq!(
        with_update.render(Dialect::MySql).unwrap(),
        "WITH src AS (SELECT `a`\nFROM `src`)\n\nUPDATE `t1` SET a = 1"
    );

    let with_select = source.set_with_clause(Some(with.clone()));
    assert_eq!(with_select.with_clause(), Some(&with));
    assert_eq!(with_select.set_with_clause(None), source);
}
