//! Fuzz test for column type rewrites.
//!
//! A mapping covering every column type name must always succeed and leave
//! the column count untouched; a mapping missing one name must fail.

use hashbrown::HashMap;
use honggfuzz::fuzz;
use metasequoia_ast::{CreateTableStatement, Error};

fn main() {
    loop {
        fuzz!(|data: (CreateTableStatement, bool)| {
            let (create, remove_params) = data;
            let names = create.column_type_names();

            let mapping: HashMap<String, String> = names
                .iter()
                .map(|name| (name.clone(), format!("{name}_X")))
                .collect();
            let rewritten = create
                .change_type(&mapping, remove_params)
                .expect("Complete mapping should succeed");
            assert_eq!(rewritten.columns.len(), create.columns.len());

            if let Some(missing) = names.first() {
                let mut partial = mapping.clone();
                partial.remove(missing);
                assert_eq!(
                    create.change_type(&partial, remove_params),
                    Err(Error::MutationInput {
                        type_name: missing.clone()
                    })
                );
            }
        });
    }
}
