use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::logical_type::LogicalType;
use super::repetition::Repetition;
use super::schema_node::SchemaNode;

/// Name of the synthetic repeated group inside a `MAP` group.
pub const MAP_ENTRY_NAME: &str = "key_value";

/// Name of the synthetic repeated group inside a `LIST` group.
pub const LIST_ENTRY_NAME: &str = "list";

/// A node with ordered children.
///
/// A group annotated `MAP` or `LIST` always has the canonical nested shape:
///
/// ```text
/// <rep> group <name> (MAP) {        <rep> group <name> (LIST) {
///   repeated group key_value {        repeated group list {
///     <key>                             <element>
///     <value>                         }
///   }                               }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    pub name: String,
    pub repetition: Repetition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<i32>,
    #[serde(default, skip_serializing_if = "LogicalType::is_none")]
    pub logical_type: LogicalType,
    pub children: Vec<SchemaNode>,
}

impl GroupNode {
    /// Creates an unannotated group. Children keep the given order.
    pub fn new(
        name: impl Into<String>,
        repetition: Repetition,
        children: Vec<SchemaNode>,
    ) -> Self {
        Self {
            name: name.into(),
            repetition,
            field_id: None,
            logical_type: LogicalType::None,
            children,
        }
    }

    /// Creates a `MAP` group around its `key_value` entry group.
    pub fn map(
        name: impl Into<String>,
        repetition: Repetition,
        key_value: GroupNode,
    ) -> Result<Self, SchemaError> {
        Self::annotated(name, repetition, LogicalType::Map, key_value)
    }

    /// Creates a `LIST` group around its `list` entry group.
    pub fn list(
        name: impl Into<String>,
        repetition: Repetition,
        list: GroupNode,
    ) -> Result<Self, SchemaError> {
        Self::annotated(name, repetition, LogicalType::List, list)
    }

    fn annotated(
        name: impl Into<String>,
        repetition: Repetition,
        logical_type: LogicalType,
        entry: GroupNode,
    ) -> Result<Self, SchemaError> {
        let group = Self {
            name: name.into(),
            repetition,
            field_id: None,
            logical_type,
            children: vec![SchemaNode::Group(entry)],
        };
        group.validate_annotation()?;
        Ok(group)
    }

    /// Attaches an explicit field id.
    pub fn with_field_id(mut self, field_id: Option<i32>) -> Self {
        self.field_id = field_id;
        self
    }

    /// Checks that a `MAP` or `LIST` group has its canonical nested shape.
    ///
    /// Unannotated groups always pass. Only this group's own shape is checked,
    /// not its descendants.
    pub fn validate_annotation(&self) -> Result<(), SchemaError> {
        let (kind, entry_name, entry_children) = match self.logical_type {
            LogicalType::None => return Ok(()),
            LogicalType::Map => ("MAP", MAP_ENTRY_NAME, 2),
            LogicalType::List => ("LIST", LIST_ENTRY_NAME, 1),
            other => {
                return Err(SchemaError::MisplacedLogicalType {
                    logical: other.to_string(),
                    name: self.name.clone(),
                });
            }
        };

        if self.repetition == Repetition::Repeated {
            return Err(SchemaError::RepeatedSugarGroup {
                kind,
                name: self.name.clone(),
            });
        }

        let [entry] = self.children.as_slice() else {
            return Err(SchemaError::SugarChildCount {
                kind,
                found: self.children.len(),
            });
        };

        let entry = match entry {
            SchemaNode::Group(g) => g,
            SchemaNode::Primitive(p) => {
                return Err(SchemaError::SugarEntryNotGroup {
                    kind,
                    name: p.name.clone(),
                });
            }
        };

        if entry.name != entry_name {
            return Err(SchemaError::SugarEntryName {
                kind,
                expected: entry_name,
                found: entry.name.clone(),
            });
        }

        if entry.repetition != Repetition::Repeated {
            return Err(SchemaError::SugarEntryNotRepeated {
                kind,
                name: entry.name.clone(),
            });
        }

        if entry.children.len() != entry_children {
            return Err(SchemaError::SugarEntryChildCount {
                kind,
                expected: entry_children,
                found: entry.children.len(),
            });
        }

        if self.logical_type == LogicalType::List {
            let element = &entry.children[0];
            if element.repetition() == Repetition::Repeated {
                return Err(SchemaError::RepeatedListElement {
                    name: element.name().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Looks up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&SchemaNode> {
        self.children.iter().find(|c| c.name() == name)
    }

    /// The synthetic entry group of a `MAP` or `LIST` group.
    pub fn entry(&self) -> Option<&GroupNode> {
        if !self.logical_type.is_group_annotation() {
            return None;
        }
        match self.children.as_slice() {
            [SchemaNode::Group(entry)] => Some(entry),
            _ => None,
        }
    }
}
