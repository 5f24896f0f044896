#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;
// `arbitrary`'s derive expands to `::std` paths.
#[cfg(feature = "testing")]
extern crate std;

pub mod ast;
pub mod catalog;
pub mod dialect;
pub mod errors;
pub mod mutation;
pub mod render;

// Re-export the node model
pub use ast::*;
pub use catalog::{
    CastDataType, CompareOperator, ComputeOperator, GeneratedColumnSaveMode, InsertType, JoinType,
    Keyword, LogicalOperator, OrderType, UnionType, WindowRowType,
};
pub use dialect::{Dialect, RenderOptions, UnknownDialect};
pub use mutation::{TableNameOwner, WithClauseOwner};
pub use render::{Render, SqlWriter, render};

// Re-export errors
pub use errors::Error;
