use serde::{Deserialize, Serialize};

use super::group_node::GroupNode;
use super::logical_type::LogicalType;
use super::primitive_node::PrimitiveNode;
use super::repetition::Repetition;

/// A node of the schema tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
    Group(GroupNode),
    Primitive(PrimitiveNode),
}

impl SchemaNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Group(g) => &g.name,
            Self::Primitive(p) => &p.name,
        }
    }

    pub fn repetition(&self) -> Repetition {
        match self {
            Self::Group(g) => g.repetition,
            Self::Primitive(p) => p.repetition,
        }
    }

    pub fn field_id(&self) -> Option<i32> {
        match self {
            Self::Group(g) => g.field_id,
            Self::Primitive(p) => p.field_id,
        }
    }

    pub fn logical_type(&self) -> LogicalType {
        match self {
            Self::Group(g) => g.logical_type,
            Self::Primitive(p) => p.logical_type,
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            Self::Group(g) => Some(g),
            Self::Primitive(_) => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveNode> {
        match self {
            Self::Primitive(p) => Some(p),
            Self::Group(_) => None,
        }
    }

    /// Number of group levels from this node down to its deepest leaf.
    pub fn depth(&self) -> usize {
        match self {
            Self::Primitive(_) => 0,
            Self::Group(g) => {
                1 + g.children.iter().map(SchemaNode::depth).max().unwrap_or(0)
            }
        }
    }
}

impl From<GroupNode> for SchemaNode {
    fn from(g: GroupNode) -> Self {
        Self::Group(g)
    }
}

impl From<PrimitiveNode> for SchemaNode {
    fn from(p: PrimitiveNode) -> Self {
        Self::Primitive(p)
    }
}
