//! Trees survive a trip through JSON when the `serde` feature is enabled.

#![cfg(feature = "serde")]

use metasequoia_ast::{
    ColumnDefinition, ColumnType, CreateTableStatement, Dialect, Expression, Render,
    RenderOptions, Statement, TableName,
};

#[test]
fn test_create_table_through_json() {
    let create = CreateTableStatement {
        comment: Some("'events'".into()),
        partitioned_by: vec![ColumnDefinition::new("dt", ColumnType::new("STRING"))],
        ..CreateTableStatement::new(
            TableName::qualified("dw", "events"),
            vec![ColumnDefinition::new(
                "amount",
                ColumnType::with_params(
                    "DECIMAL",
                    vec![Expression::literal("10"), Expression::literal("2")],
                ),
            )],
        )
    };
    let statement = Statement::from(create);

    let json = serde_json::to_string(&statement).unwrap();
    let decoded: Statement = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, statement);
    assert_eq!(
        decoded.render(Dialect::Hive).unwrap(),
        statement.render(Dialect::Hive).unwrap()
    );
}

#[test]
fn test_render_options_through_json() {
    let options = RenderOptions::new(Dialect::Db2).with_max_depth(32);
    let json = serde_json::to_string(&options).unwrap();
    let decoded: RenderOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, options);
}
