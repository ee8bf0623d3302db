use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolution of a timestamp annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Millis,
    Micros,
    Nanos,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [Self::Millis, Self::Micros, Self::Nanos];

    /// Matches `milliseconds`, `microseconds` or `nanoseconds`, ignoring ASCII case.
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|u| u.keyword().eq_ignore_ascii_case(s))
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Millis => "milliseconds",
            Self::Micros => "microseconds",
            Self::Nanos => "nanoseconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(TimeUnit::from_keyword("milliseconds"), Some(TimeUnit::Millis));
        assert_eq!(TimeUnit::from_keyword("MICROSECONDS"), Some(TimeUnit::Micros));
        assert_eq!(TimeUnit::from_keyword("Nanoseconds"), Some(TimeUnit::Nanos));
        assert_eq!(TimeUnit::from_keyword("seconds"), None);
    }
}
