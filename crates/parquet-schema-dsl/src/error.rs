use std::fmt;

/// Where in the source an error was detected.
///
/// Captured when the offending token is consumed: the 1-based line number, the
/// text of that line up to and including the token, and the token's byte
/// offset in the whole source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub line_text: String,
    pub offset: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} : {}", self.line, self.line_text)
    }
}

/// Errors that occur during schema text parsing.
///
/// Every error is terminal: the first one aborts the parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DslError {
    /// The lexer encountered bytes that do not form a token.
    InvalidToken { text: String, location: Location },

    /// The input ran out while more tokens were expected.
    UnexpectedEndOfInput { location: Location },

    /// The parser encountered a token outside the expected set.
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
        location: Location,
    },

    /// A repetition keyword other than `required`, `optional` or `repeated`.
    UnknownRepetition { found: String, location: Location },

    /// A primitive type name that is not a physical type.
    UnknownPhysicalType { found: String, location: Location },

    /// A logical type annotation that is not recognized.
    UnknownLogicalType { found: String, location: Location },

    /// A `field_id` value that is not a 32-bit integer.
    InvalidFieldId { text: String, location: Location },

    /// A well-formed token sequence that violates a structural rule, such as
    /// a `MAP` body without a two-child `key_value` group.
    StructuralError { reason: String, location: Location },

    /// Groups are nested deeper than the configured limit.
    NestingTooDeep { limit: usize, location: Location },

    /// The source could not be read.
    Io { message: String },
}

impl DslError {
    /// The source location, when the error came from a token.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::InvalidToken { location, .. }
            | Self::UnexpectedEndOfInput { location }
            | Self::UnexpectedToken { location, .. }
            | Self::UnknownRepetition { location, .. }
            | Self::UnknownPhysicalType { location, .. }
            | Self::UnknownLogicalType { location, .. }
            | Self::InvalidFieldId { location, .. }
            | Self::StructuralError { location, .. }
            | Self::NestingTooDeep { location, .. } => Some(location),
            Self::Io { .. } => None,
        }
    }

    /// A stable snake_case name for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "invalid_token",
            Self::UnexpectedEndOfInput { .. } => "unexpected_end_of_input",
            Self::UnexpectedToken { .. } => "unexpected_token",
            Self::UnknownRepetition { .. } => "unknown_repetition",
            Self::UnknownPhysicalType { .. } => "unknown_physical_type",
            Self::UnknownLogicalType { .. } => "unknown_logical_type",
            Self::InvalidFieldId { .. } => "invalid_field_id",
            Self::StructuralError { .. } => "structural_error",
            Self::NestingTooDeep { .. } => "nesting_too_deep",
            Self::Io { .. } => "io",
        }
    }
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("'{i}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DslError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { text, location } => {
                write!(f, "invalid token '{text}' at {location}")
            }
            Self::UnexpectedEndOfInput { location } => {
                write!(f, "unexpected end of schema at {location}")
            }
            Self::UnexpectedToken {
                expected,
                found,
                location,
            } => match expected.as_slice() {
                [single] => write!(
                    f,
                    "unexpected token '{found}' at {location}: expected '{single}'"
                ),
                _ => write!(
                    f,
                    "unexpected token '{found}' at {location}: expected one of {}",
                    quoted_list(expected)
                ),
            },
            Self::UnknownRepetition { found, location } => {
                write!(
                    f,
                    "unknown repetition '{found}' at {location}: expected required, optional or repeated"
                )
            }
            Self::UnknownPhysicalType { found, location } => {
                write!(f, "unknown physical type '{found}' at {location}")
            }
            Self::UnknownLogicalType { found, location } => {
                write!(f, "unknown logical type '{found}' at {location}")
            }
            Self::InvalidFieldId { text, location } => {
                write!(
                    f,
                    "invalid field id '{text}' at {location}: expected a 32-bit integer"
                )
            }
            Self::StructuralError { reason, location } => {
                write!(f, "{reason} at {location}")
            }
            Self::NestingTooDeep { limit, location } => {
                write!(
                    f,
                    "groups nested deeper than {limit} levels at {location}"
                )
            }
            Self::Io { message } => {
                write!(f, "failed to read schema: {message}")
            }
        }
    }
}

impl std::error::Error for DslError {}
