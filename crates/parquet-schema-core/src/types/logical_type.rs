use std::fmt;

use serde::{Deserialize, Serialize};

use super::time_unit::TimeUnit;

/// Semantic annotation refining a node beyond its physical layout.
///
/// `Map` and `List` only appear on groups; `String` and `Timestamp` only on
/// primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LogicalType {
    #[default]
    None,
    String,
    Map,
    List,
    Timestamp(TimestampType),
}

/// Parameters of a `Timestamp` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampType {
    pub is_adjusted_to_utc: bool,
    pub unit: TimeUnit,
    #[serde(default)]
    pub is_from_converted_type: bool,
}

impl TimestampType {
    pub fn new(is_adjusted_to_utc: bool, unit: TimeUnit) -> Self {
        Self {
            is_adjusted_to_utc,
            unit,
            is_from_converted_type: false,
        }
    }

    /// Marks the annotation as originating from a legacy converted type.
    pub fn from_converted_type(mut self) -> Self {
        self.is_from_converted_type = true;
        self
    }
}

impl LogicalType {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// True for the annotations that carry a fixed nested group shape.
    pub fn is_group_annotation(&self) -> bool {
        matches!(self, Self::Map | Self::List)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::String => write!(f, "String"),
            Self::Map => write!(f, "MAP"),
            Self::List => write!(f, "LIST"),
            Self::Timestamp(ts) => {
                write!(f, "Timestamp({}, utc={})", ts.unit, ts.is_adjusted_to_utc)
            }
        }
    }
}
