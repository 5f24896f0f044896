//! Properties over arbitrary trees.
//!
//! Trees are drawn with [`arbitrary::Unstructured`] from deterministic byte
//! buffers, so every run checks the same inputs.

#![cfg(feature = "testing")]

use arbitrary::{Arbitrary, Unstructured};
use metasequoia_ast::{
    CreateTableStatement, Dialect, Error, Expression, Render, Statement, TableName,
    TableNameOwner,
};

/// Deterministic pseudo-random buffers (xorshift) for `Unstructured`.
fn buffers(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    state.to_le_bytes()[0]
                })
                .collect()
        })
        .collect()
}

fn for_each_arbitrary<T: for<'a> Arbitrary<'a>>(mut check: impl FnMut(T)) {
    for data in buffers(256, 512) {
        if let Ok(value) = Unstructured::new(&data).arbitrary::<T>() {
            check(value);
        }
    }
}

fn assert_no_panic_error(result: &Result<String, Error>) {
    if let Err(err) = result {
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn test_statement_render_is_deterministic() {
    for_each_arbitrary(|statement: Statement| {
        for dialect in Dialect::ALL {
            let first = statement.render(dialect);
            assert_no_panic_error(&first);
            assert_eq!(first, statement.render(dialect));
        }
    });
}

#[test]
fn test_expression_clone_renders_identically() {
    for_each_arbitrary(|expression: Expression| {
        let copy = expression.clone();
        assert_eq!(copy, expression);
        for dialect in Dialect::ALL {
            assert_eq!(copy.render(dialect), expression.render(dialect));
        }
    });
}

#[test]
fn test_zero_override_copy_is_equal() {
    for_each_arbitrary(|create: CreateTableStatement| {
        assert_eq!(create.set_table_name(create.table_name.clone()), create);
        let names = create.column_type_names();
        assert!(names.len() <= create.columns.len());
    });
}

#[test]
fn test_table_name_always_quoted() {
    for_each_arbitrary(|table: TableName| {
        let sql = table.render(Dialect::Default).unwrap();
        assert!(sql.starts_with('`') && sql.ends_with('`'));
    });
}
