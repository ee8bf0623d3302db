use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

use super::logical_type::LogicalType;
use super::physical_type::PhysicalType;
use super::repetition::Repetition;

/// A leaf column: physical type plus an optional logical annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimitiveNode {
    pub name: String,
    pub repetition: Repetition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<i32>,
    pub physical_type: PhysicalType,
    #[serde(default, skip_serializing_if = "LogicalType::is_none")]
    pub logical_type: LogicalType,
}

impl PrimitiveNode {
    /// Creates an unannotated primitive.
    pub fn new(
        name: impl Into<String>,
        repetition: Repetition,
        physical_type: PhysicalType,
    ) -> Self {
        Self {
            name: name.into(),
            repetition,
            field_id: None,
            physical_type,
            logical_type: LogicalType::None,
        }
    }

    /// Creates an annotated primitive, validating that the annotation fits the
    /// physical type:
    /// - `String` requires `binary`
    /// - `Timestamp` requires `int64`
    /// - `MAP` and `LIST` are rejected outright
    pub fn with_logical_type(
        name: impl Into<String>,
        repetition: Repetition,
        physical_type: PhysicalType,
        logical_type: LogicalType,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        let required = match logical_type {
            LogicalType::None => None,
            LogicalType::String => Some(PhysicalType::ByteArray),
            LogicalType::Timestamp(_) => Some(PhysicalType::Int64),
            LogicalType::Map | LogicalType::List => {
                return Err(SchemaError::MisplacedLogicalType {
                    logical: logical_type.to_string(),
                    name,
                });
            }
        };

        if let Some(required) = required {
            if required != physical_type {
                return Err(SchemaError::IncompatibleLogicalType {
                    logical: logical_type.to_string(),
                    physical: physical_type,
                });
            }
        }

        Ok(Self {
            name,
            repetition,
            field_id: None,
            physical_type,
            logical_type,
        })
    }

    /// Attaches an explicit field id.
    pub fn with_field_id(mut self, field_id: Option<i32>) -> Self {
        self.field_id = field_id;
        self
    }
}
