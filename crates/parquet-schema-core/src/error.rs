use std::fmt;

use crate::types::PhysicalType;

/// Errors that occur when constructing or validating schema nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// A MAP or LIST group does not own exactly one child.
    SugarChildCount { kind: &'static str, found: usize },
    /// The single child of a MAP or LIST group is a primitive.
    SugarEntryNotGroup { kind: &'static str, name: String },
    /// The synthetic entry group has the wrong name.
    SugarEntryName {
        kind: &'static str,
        expected: &'static str,
        found: String,
    },
    /// The synthetic entry group is not `repeated`.
    SugarEntryNotRepeated { kind: &'static str, name: String },
    /// The synthetic entry group has the wrong number of children.
    SugarEntryChildCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    /// A MAP or LIST group is itself `repeated`.
    RepeatedSugarGroup { kind: &'static str, name: String },
    /// A LIST element is `repeated`.
    RepeatedListElement { name: String },
    /// A logical annotation that only applies to groups was put on a primitive,
    /// or the reverse.
    MisplacedLogicalType { logical: String, name: String },
    /// A logical annotation is not valid for the primitive's physical type.
    IncompatibleLogicalType {
        logical: String,
        physical: PhysicalType,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SugarChildCount { kind, found } => {
                write!(f, "{kind} group must have exactly 1 child, found {found}")
            }
            Self::SugarEntryNotGroup { kind, name } => {
                write!(f, "{kind} entry '{name}' must be a group")
            }
            Self::SugarEntryName {
                kind,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{kind} entry group must be named '{expected}', found '{found}'"
                )
            }
            Self::SugarEntryNotRepeated { kind, name } => {
                write!(f, "{kind} entry group '{name}' must be repeated")
            }
            Self::SugarEntryChildCount {
                kind,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{kind} entry group must have exactly {expected} children, found {found}"
                )
            }
            Self::RepeatedSugarGroup { kind, name } => {
                write!(f, "{kind} group '{name}' must not be repeated")
            }
            Self::RepeatedListElement { name } => {
                write!(f, "LIST element '{name}' must not be repeated")
            }
            Self::MisplacedLogicalType { logical, name } => {
                write!(f, "logical type {logical} is not valid on '{name}'")
            }
            Self::IncompatibleLogicalType { logical, physical } => {
                write!(
                    f,
                    "logical type {logical} cannot annotate physical type {physical}"
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}
