//! Dialect-dependent acceptance and spelling.
//!
//! This module tests:
//! - Operators and expressions rejected by some dialects
//! - Statements with no rendering for some dialects
//! - DB2 pseudo-column spelling
//! - Parsing and printing dialect names

use metasequoia_ast::{
    AnalyzeTableStatement, ColumnDefinition, ColumnName, ColumnType, ComputeOperator,
    CreateTableStatement, Dialect, Error, Expression, IndexExpression, Render, TableName,
    UnknownDialect,
};

fn modulo() -> Expression {
    Expression::compute(
        Expression::column("a"),
        ComputeOperator::Mod,
        Expression::literal("3"),
    )
}

#[test]
fn test_modulo_gating() {
    for dialect in [
        Dialect::Default,
        Dialect::MySql,
        Dialect::SqlServer,
        Dialect::Hive,
    ] {
        assert_eq!(modulo().render(dialect).unwrap(), "`a` % 3");
    }
    assert_eq!(
        modulo().render(Dialect::Db2),
        Err(Error::UnsupportedDialectFeature {
            feature: "%",
            dialect: Dialect::Db2,
        })
    );
}

#[test]
fn test_nested_rejection_surfaces() {
    let wrapped = Expression::and(Expression::column("b"), modulo());
    assert!(matches!(
        wrapped.render(Dialect::Db2),
        Err(Error::UnsupportedDialectFeature { .. })
    ));
}

#[test]
fn test_subscript_is_hive_only() {
    let subscript = Expression::Index(IndexExpression {
        array: Box::new(Expression::column("arr")),
        index: Box::new(Expression::literal("0")),
    });
    assert_eq!(subscript.render(Dialect::Hive).unwrap(), "`arr`[0]");
    for dialect in [Dialect::Default, Dialect::MySql, Dialect::Db2, Dialect::SqlServer] {
        assert!(matches!(
            subscript.render(dialect),
            Err(Error::UnsupportedDialectFeature { .. })
        ));
    }
}

#[test]
fn test_create_table_dialects() {
    let create = CreateTableStatement::new(
        TableName::new("t"),
        vec![ColumnDefinition::new("id", ColumnType::new("INT"))],
    );
    assert!(create.render(Dialect::MySql).is_ok());
    assert!(create.render(Dialect::Hive).is_ok());
    for dialect in [Dialect::Default, Dialect::Db2, Dialect::SqlServer] {
        assert_eq!(
            create.render(dialect),
            Err(Error::UnrecognizedDialect {
                statement: "CREATE TABLE",
                dialect,
            })
        );
    }
}

#[test]
fn test_analyze_dialects() {
    let analyze = AnalyzeTableStatement::new(TableName::new("t"));
    assert_eq!(
        analyze.render(Dialect::Hive).unwrap(),
        "ANALYZE TABLE `t` COMPUTE STATISTICS"
    );
    assert_eq!(analyze.render(Dialect::MySql).unwrap(), "ANALYZE TABLE `t`");
    assert!(matches!(
        analyze.render(Dialect::SqlServer),
        Err(Error::UnsupportedDialectFeature { .. })
    ));
}

#[test]
fn test_db2_pseudo_columns() {
    let now = Expression::Column(ColumnName::new("CURRENT_TIMESTAMP"));
    assert_eq!(now.render(Dialect::MySql).unwrap(), "CURRENT_TIMESTAMP");
    assert_eq!(now.render(Dialect::Db2).unwrap(), "CURRENT TIMESTAMP");

    let plain = Expression::column("current_date_of_birth");
    assert_eq!(plain.render(Dialect::Db2).unwrap(), "`current_date_of_birth`");
}

#[test]
fn test_dialect_names() {
    assert_eq!("MySQL".parse::<Dialect>(), Ok(Dialect::MySql));
    assert_eq!(" hive ".parse::<Dialect>(), Ok(Dialect::Hive));
    assert_eq!("sql_server".parse::<Dialect>(), Ok(Dialect::SqlServer));
    assert_eq!("oracle".parse::<Dialect>(), Err(UnknownDialect));
    for dialect in Dialect::ALL {
        assert!(!dialect.to_string().is_empty());
    }
}
