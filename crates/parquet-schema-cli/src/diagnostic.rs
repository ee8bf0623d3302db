use miette::{Diagnostic, NamedSource, SourceSpan};
use parquet_schema_dsl::DslError;

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct SchemaDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', ',', ';', '{', '}', '(', ')', '='];

/// Span of the token starting at `offset`.
///
/// Offsets at or past the end of the source point at the last character.
fn token_span(source: &str, offset: usize) -> SourceSpan {
    if offset >= source.len() || !source.is_char_boundary(offset) {
        let (start, len) = source
            .char_indices()
            .last()
            .map(|(i, c)| (i, c.len_utf8()))
            .unwrap_or((0, 0));
        return (start, len).into();
    }

    let rest = &source[offset..];
    let len = match rest.chars().next() {
        Some(c) if DELIMITERS.contains(&c) => c.len_utf8(),
        _ => rest.find(DELIMITERS).unwrap_or(rest.len()),
    };
    (offset, len).into()
}

fn quoted(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("'{i}'"))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Convert a `DslError` into a miette `SchemaDiagnostic`.
///
/// The message keeps the error's line and partial-line context; the label
/// points at the offending token.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> SchemaDiagnostic {
    let named_src = NamedSource::new(filename, source.to_string());
    let span = error
        .location()
        .map(|location| token_span(source, location.offset))
        .unwrap_or_else(|| (0, 0).into());

    let (label, suggestion) = match error {
        DslError::InvalidToken { .. } => (
            "unrecognized token".to_string(),
            Some("Check for unsupported characters.".to_string()),
        ),
        DslError::UnexpectedEndOfInput { .. } => (
            "input ended here".to_string(),
            Some("Close every group with '}' and every field with ';'.".to_string()),
        ),
        DslError::UnexpectedToken {
            expected, found, ..
        } => (
            format!("expected {}, found '{found}'", quoted(expected)),
            None,
        ),
        DslError::UnknownRepetition { .. } => (
            "unknown repetition".to_string(),
            Some("Use one of: required, optional, repeated.".to_string()),
        ),
        DslError::UnknownPhysicalType { .. } => (
            "unknown physical type".to_string(),
            Some(
                "Use one of: boolean, int32, int64, int96, float, double, binary, fixed_len_byte_array."
                    .to_string(),
            ),
        ),
        DslError::UnknownLogicalType { .. } => (
            "unknown logical type".to_string(),
            Some("Primitives accept String or Timestamp(...); groups accept MAP or LIST.".to_string()),
        ),
        DslError::InvalidFieldId { .. } => (
            "expected a 32-bit integer".to_string(),
            None,
        ),
        DslError::StructuralError { reason, .. } => (reason.clone(), None),
        DslError::NestingTooDeep { limit, .. } => (
            format!("more than {limit} nested groups"),
            Some("Raise parse.max_depth in the config file if this is intended.".to_string()),
        ),
        // Io and future non_exhaustive variants
        _ => ("error".to_string(), None),
    };

    SchemaDiagnostic {
        src: named_src,
        span,
        message: error.to_string(),
        label,
        suggestion,
    }
}

/// Render a parse error for a file using miette.
pub fn render_diagnostic(error: &DslError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(dsl_error_to_diagnostic(error, source, filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet_schema_dsl::parse;

    fn diagnose(source: &str) -> SchemaDiagnostic {
        let err = parse(source).unwrap_err();
        dsl_error_to_diagnostic(&err, source, "test.schema")
    }

    #[test]
    fn token_span_covers_word() {
        let span = token_span("required int8 a;", 9);
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 4);
    }

    #[test]
    fn token_span_single_delimiter() {
        let span = token_span("group x }", 8);
        assert_eq!(span.offset(), 8);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn token_span_past_end() {
        let span = token_span("abc\n", 4);
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 1);
        let empty = token_span("", 0);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    fn unknown_physical_type_diagnostic() {
        let diag = diagnose("required group s {\n  required int8 a;\n}\n");
        assert!(diag.message.contains("int8"));
        assert!(diag.message.contains("line 2"));
        assert_eq!(diag.span.offset(), 30);
        assert_eq!(diag.span.len(), 4);
        assert!(diag.suggestion.as_ref().unwrap().contains("int32"));
    }

    #[test]
    fn unexpected_token_diagnostic() {
        let diag = diagnose("required group s }");
        assert!(diag.label.contains("expected '{'"));
        assert!(diag.label.contains("found '}'"));
    }

    #[test]
    fn structural_error_diagnostic() {
        let diag = diagnose(
            "required group s {\n  optional group l (LIST) {\n    repeated group list {\n    }\n  }\n}\n",
        );
        assert!(diag.label.contains("exactly 1 children"));
    }

    #[test]
    fn end_of_input_diagnostic() {
        let diag = diagnose("required group s {\n");
        assert!(diag.message.contains("unexpected end"));
        assert!(diag.suggestion.is_some());
    }

    #[test]
    fn render_diagnostic_produces_report() {
        let source = "required group s {\n  sometimes int32 a;\n}\n";
        let err = parse(source).unwrap_err();
        let report = render_diagnostic(&err, source, "test.schema");
        assert!(report.to_string().contains("sometimes"));
    }
}
