//! Fuzz test for render determinism.
//!
//! This fuzzer generates arbitrary statements and verifies that:
//! 1. Rendering never panics, whatever the dialect
//! 2. Rendering the same tree twice yields identical results
//! 3. A clone renders exactly like the original

use honggfuzz::fuzz;
use metasequoia_ast::{Dialect, Render, Statement};

fn main() {
    loop {
        fuzz!(|statement: Statement| {
            let copy = statement.clone();
            assert_eq!(copy, statement, "Clone should equal original");

            for dialect in Dialect::ALL {
                let first = statement.render(dialect);
                assert_eq!(
                    first,
                    statement.render(dialect),
                    "Rendering should be deterministic"
                );
                assert_eq!(
                    first,
                    copy.render(dialect),
                    "Clone should render like the original"
                );
            }
        });
    }
}
