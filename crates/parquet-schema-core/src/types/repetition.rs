use std::fmt;

use serde::{Deserialize, Serialize};

/// Cardinality qualifier on a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repetition {
    /// Exactly one value.
    Required,
    /// Zero or one value.
    Optional,
    /// Zero or more values.
    Repeated,
}

impl Repetition {
    /// Every repetition, in declaration order.
    pub const ALL: [Repetition; 3] = [Self::Required, Self::Optional, Self::Repeated];

    /// Matches a repetition keyword, ignoring ASCII case.
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.keyword().eq_ignore_ascii_case(s))
    }

    /// The canonical lowercase keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Repeated => "repeated",
        }
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
