//! # parquet-schema-dsl
//!
//! Parser and printer for the Parquet schema text format.
//!
//! This crate provides:
//! - A lexer that splits schema text on its delimiter set
//! - A tokenizer with one-token lookahead and line tracking for diagnostics
//! - A recursive descent parser that produces a [`SchemaNode`] tree,
//!   expanding `MAP` and `LIST` sugar into their canonical nested groups
//! - A printer that renders a tree back to canonical text
//! - Round-trip fidelity: `print(parse(text))` equals `text` for canonical input
//!
//! # Example
//!
//! ```
//! use parquet_schema_dsl::{parse, print};
//!
//! let source = "\
//! required group schema {
//!   required int32 a;
//!   optional group b (MAP) {
//!     repeated group key_value {
//!       required binary key (String);
//!       optional int64 value;
//!     }
//!   }
//! }
//! ";
//!
//! let root = parse(source).expect("parse failed");
//! assert_eq!(root.name(), "schema");
//! assert_eq!(print(&root), source);
//! ```

pub mod error;
mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
pub mod tokenizer;

pub use parquet_schema_core::types::SchemaNode;

pub use error::{DslError, Location};
pub use parser::{parse, parse_reader, parse_with_options, ParseOptions, DEFAULT_MAX_DEPTH};
pub use printer::{print, print_with_indent, write_schema, DEFAULT_INDENT};
pub use tokenizer::Tokenizer;
