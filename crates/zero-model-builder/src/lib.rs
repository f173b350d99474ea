//! Transform a relational data model into a fully resolved client schema.
//!
//! The entry point is [`schema_builder::build`]. Building is a pure function of the document
//! and the options: no I/O, no shared state.

pub mod context;
pub mod error;
pub mod join_table_builder;
pub mod naming;
pub mod options;
pub mod relation_builder;
pub mod schema_builder;
pub mod table_builder;
pub mod type_mapper;

pub use error::SchemaBuildingError;
pub use options::BuildOptions;
pub use schema_builder::{build, build_with_policy};

#[cfg(test)]
mod test_util;
