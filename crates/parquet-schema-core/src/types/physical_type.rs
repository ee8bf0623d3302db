use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical storage type of a primitive column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

impl PhysicalType {
    /// Every physical type, in declaration order.
    pub const ALL: [PhysicalType; 8] = [
        Self::Boolean,
        Self::Int32,
        Self::Int64,
        Self::Int96,
        Self::Float,
        Self::Double,
        Self::ByteArray,
        Self::FixedLenByteArray,
    ];

    /// Matches a type keyword, ignoring ASCII case.
    ///
    /// `byte_array` is accepted as an alias of `binary`.
    pub fn from_keyword(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("byte_array") {
            return Some(Self::ByteArray);
        }
        Self::ALL
            .into_iter()
            .find(|t| t.keyword().eq_ignore_ascii_case(s))
    }

    /// The canonical lowercase keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int96 => "int96",
            Self::Float => "float",
            Self::Double => "double",
            Self::ByteArray => "binary",
            Self::FixedLenByteArray => "fixed_len_byte_array",
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
