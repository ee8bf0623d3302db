//! # parquet-schema-core
//!
//! The in-memory schema tree produced by the schema text parser.
//!
//! A schema is a tree of [`SchemaNode`](types::SchemaNode) values. Groups own
//! an ordered list of children; primitives carry a physical storage type and an
//! optional logical annotation. The `MAP` and `LIST` annotations on groups
//! imply a fixed nested shape, which the validating constructors on
//! [`GroupNode`](types::GroupNode) enforce.

pub mod error;
pub mod types;

pub use error::SchemaError;
