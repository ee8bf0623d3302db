use std::path::PathBuf;

use parquet_schema_dsl::DslError;

/// Exit codes for the CLI process.
///
/// - 0: success
/// - 1: general error (missing schema option, unreadable or oversized file)
/// - 2: invalid arguments / configuration
/// - 3: parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    InvalidArguments = 2,
    ParseError = 3,
}

/// Errors returned by the CLI.
///
/// Each variant maps to an `ExitCode` and can produce structured
/// output in JSON mode.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The schema text failed to parse.
    #[error("failed to parse {file}")]
    Parse {
        error: DslError,
        source_text: String,
        file: PathBuf,
    },

    /// IO errors (file not found, permission denied, invalid UTF-8).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema file exceeds the configured size limit.
    #[error("{path} is {size} bytes, over the {limit} byte limit")]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// `--schema` was not given.
    #[error("missing required option '--schema <PATH>'\n\n{usage}")]
    MissingSchema { usage: String },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Parse { .. } => ExitCode::ParseError,
            Self::Config { .. } => ExitCode::InvalidArguments,
            Self::Io { .. }
            | Self::InputTooLarge { .. }
            | Self::MissingSchema { .. }
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Parse { error, file, .. } => {
                let mut json = serde_json::json!({
                    "error": "parse_error",
                    "kind": error.kind(),
                    "file": file.display().to_string(),
                    "message": error.to_string(),
                });
                if let Some(location) = error.location() {
                    json["line"] = location.line.into();
                    json["line_text"] = location.line_text.clone().into();
                }
                json
            }
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
