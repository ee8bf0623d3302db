use std::io::Read;

use parquet_schema_core::types::{
    GroupNode, LogicalType, PhysicalType, PrimitiveNode, Repetition, SchemaNode, TimeUnit,
    TimestampType, LIST_ENTRY_NAME, MAP_ENTRY_NAME,
};
use parquet_schema_core::SchemaError;

use crate::error::DslError;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Group nesting allowed by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

const GROUP: &str = "group";
const FIELD_ID: &str = "field_id";

/// Knobs for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested group levels, the root group counting as one.
    /// The synthetic entry group of a `MAP` or `LIST` counts as a level.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Recursive descent parser for schema text.
///
/// Pulls tokens on demand from a [`Tokenizer`] and builds the tree in a
/// single pass. The only lookahead is the tokenizer's one-token peek.
struct Parser<'a> {
    tokens: Tokenizer<'a>,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, options: &ParseOptions) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            max_depth: options.max_depth,
        }
    }

    // -- Error helpers --

    fn structural(&self, reason: impl Into<String>) -> DslError {
        DslError::StructuralError {
            reason: reason.into(),
            location: self.tokens.location(),
        }
    }

    fn schema_error(&self, err: SchemaError) -> DslError {
        self.structural(err.to_string())
    }

    fn check_depth(&self, depth: usize) -> Result<(), DslError> {
        if depth > self.max_depth {
            return Err(DslError::NestingTooDeep {
                limit: self.max_depth,
                location: self.tokens.location(),
            });
        }
        Ok(())
    }

    // -- Terminals --

    fn expect_identifier(&mut self) -> Result<Token<'a>, DslError> {
        let token = self.tokens.next_token()?;
        if token.kind != TokenKind::Word {
            return Err(DslError::UnexpectedToken {
                expected: vec!["identifier".to_string()],
                found: token.text.to_string(),
                location: self.tokens.location(),
            });
        }
        Ok(token)
    }

    fn parse_repetition(&mut self) -> Result<Repetition, DslError> {
        let token = self.tokens.next_token()?;
        Repetition::from_keyword(token.text).ok_or_else(|| DslError::UnknownRepetition {
            found: token.text.to_string(),
            location: self.tokens.location(),
        })
    }

    /// field_id = "field_id" "=" integer
    fn parse_field_id(&mut self) -> Result<Option<i32>, DslError> {
        if self.tokens.peek_token()?.text != FIELD_ID {
            return Ok(None);
        }
        self.tokens.next_token()?;
        self.tokens.expect(&["="])?;

        let token = self.tokens.next_token()?;
        token
            .text
            .parse::<i32>()
            .map(Some)
            .map_err(|_| DslError::InvalidFieldId {
                text: token.text.to_string(),
                location: self.tokens.location(),
            })
    }

    // -- Grammar productions --

    /// schema = repetition "group" group_body EOF
    fn parse_schema(&mut self) -> Result<SchemaNode, DslError> {
        let repetition = self.parse_repetition()?;
        self.tokens.expect(&[GROUP])?;
        let root = self.parse_group_body(repetition, 1)?;

        if !self.tokens.is_exhausted()? {
            let token = self.tokens.next_token()?;
            return Err(DslError::UnexpectedToken {
                expected: vec!["end of input".to_string()],
                found: token.text.to_string(),
                location: self.tokens.location(),
            });
        }

        Ok(SchemaNode::Group(root))
    }

    /// group_body = field_id? IDENT ( "(" sugar_kind ")" sugar_body | "{" field* "}" )
    fn parse_group_body(
        &mut self,
        repetition: Repetition,
        depth: usize,
    ) -> Result<GroupNode, DslError> {
        self.check_depth(depth)?;

        let field_id = self.parse_field_id()?;
        let name = self.expect_identifier()?.text;

        if self.tokens.peek_token()?.kind == TokenKind::LParen {
            let group = self.parse_sugar(name, repetition, depth)?;
            return Ok(group.with_field_id(field_id));
        }

        self.tokens.expect(&["{"])?;
        let children = self.parse_fields(depth)?;
        Ok(GroupNode::new(name, repetition, children).with_field_id(field_id))
    }

    /// field* "}"
    fn parse_fields(&mut self, depth: usize) -> Result<Vec<SchemaNode>, DslError> {
        let mut children = Vec::new();
        while self.tokens.peek_token()?.kind != TokenKind::RBrace {
            children.push(self.parse_field(depth)?);
        }
        self.tokens.next_token()?;
        Ok(children)
    }

    /// field = repetition ( "group" group_body | primitive_field )
    fn parse_field(&mut self, depth: usize) -> Result<SchemaNode, DslError> {
        let repetition = self.parse_repetition()?;
        let token = self.tokens.next_token()?;

        if token.text == GROUP {
            Ok(self.parse_group_body(repetition, depth + 1)?.into())
        } else {
            Ok(self.parse_primitive(repetition, token)?.into())
        }
    }

    /// primitive_field = TYPE field_id? IDENT ( "(" logical_type ")" )? ";"
    fn parse_primitive(
        &mut self,
        repetition: Repetition,
        type_token: Token<'a>,
    ) -> Result<PrimitiveNode, DslError> {
        let physical_type = PhysicalType::from_keyword(type_token.text).ok_or_else(|| {
            DslError::UnknownPhysicalType {
                found: type_token.text.to_string(),
                location: self.tokens.location(),
            }
        })?;

        let field_id = self.parse_field_id()?;
        let name = self.expect_identifier()?.text;

        let logical_type = if self.tokens.peek_token()?.kind == TokenKind::LParen {
            self.tokens.next_token()?;
            let logical_type = self.parse_logical_type()?;
            self.tokens.expect(&[")"])?;
            logical_type
        } else {
            LogicalType::None
        };

        let node =
            PrimitiveNode::with_logical_type(name, repetition, physical_type, logical_type)
                .map_err(|e| self.schema_error(e))?;

        self.tokens.expect(&[";"])?;
        Ok(node.with_field_id(field_id))
    }

    /// logical_type = "String" | "Timestamp" "(" params ")"
    ///
    /// `MAP` and `LIST` are returned as-is so the caller can reject them on
    /// a primitive with the node's name in the message.
    fn parse_logical_type(&mut self) -> Result<LogicalType, DslError> {
        let token = self.tokens.next_token()?;
        let text = token.text;

        if text.eq_ignore_ascii_case("string") || text.eq_ignore_ascii_case("utf8") {
            Ok(LogicalType::String)
        } else if text.eq_ignore_ascii_case("timestamp") {
            self.parse_timestamp()
        } else if text.eq_ignore_ascii_case("map") {
            Ok(LogicalType::Map)
        } else if text.eq_ignore_ascii_case("list") {
            Ok(LogicalType::List)
        } else {
            Err(DslError::UnknownLogicalType {
                found: text.to_string(),
                location: self.tokens.location(),
            })
        }
    }

    /// "(" IDENT "=" VALUE ( "," IDENT "=" VALUE )* ")"
    fn parse_params(&mut self) -> Result<Vec<(&'a str, &'a str)>, DslError> {
        self.tokens.expect(&["("])?;

        let mut params = Vec::new();
        loop {
            let key = self.expect_identifier()?.text;
            self.tokens.expect(&["="])?;
            let value = self.expect_identifier()?.text;
            params.push((key, value));

            if self.tokens.expect(&[",", ")"])?.kind == TokenKind::RParen {
                return Ok(params);
            }
        }
    }

    fn parse_bool(&self, key: &str, value: &str) -> Result<bool, DslError> {
        if value.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(self.structural(format!(
                "Timestamp parameter '{key}' must be true or false, found '{value}'"
            )))
        }
    }

    fn parse_timestamp(&mut self) -> Result<LogicalType, DslError> {
        let params = self.parse_params()?;

        let mut is_adjusted_to_utc = None;
        let mut unit = None;
        let mut is_from_converted_type = false;

        for (key, value) in params {
            match key {
                "isAdjustedToUTC" => is_adjusted_to_utc = Some(self.parse_bool(key, value)?),
                "timeUnit" => {
                    unit = Some(TimeUnit::from_keyword(value).ok_or_else(|| {
                        self.structural(format!("unknown Timestamp timeUnit '{value}'"))
                    })?);
                }
                "is_from_converted_type" => is_from_converted_type = self.parse_bool(key, value)?,
                other => {
                    tracing::debug!(key = other, value, "ignoring unknown Timestamp parameter");
                }
            }
        }

        let is_adjusted_to_utc = is_adjusted_to_utc.ok_or_else(|| {
            self.structural("Timestamp is missing required parameter 'isAdjustedToUTC'")
        })?;
        let unit = unit.ok_or_else(|| {
            self.structural("Timestamp is missing required parameter 'timeUnit'")
        })?;

        let mut timestamp = TimestampType::new(is_adjusted_to_utc, unit);
        if is_from_converted_type {
            timestamp = timestamp.from_converted_type();
        }
        Ok(LogicalType::Timestamp(timestamp))
    }

    /// sugar_body = "{" "repeated" "group" field_id? ENTRY_NAME "{" field* "}" "}"
    ///
    /// ENTRY_NAME is `key_value` for `MAP` and `list` for `LIST`.
    fn parse_sugar(
        &mut self,
        name: &str,
        repetition: Repetition,
        depth: usize,
    ) -> Result<GroupNode, DslError> {
        self.tokens.expect(&["("])?;
        let kind_token = self.tokens.next_token()?;
        let (logical_type, kind, entry_name) = match self.parse_sugar_kind(kind_token, name)? {
            LogicalType::Map => (LogicalType::Map, "MAP", MAP_ENTRY_NAME),
            _ => (LogicalType::List, "LIST", LIST_ENTRY_NAME),
        };
        self.tokens.expect(&[")"])?;
        self.tokens.expect(&["{"])?;

        let entry_repetition = self.tokens.next_token()?;
        let entry_keyword = self.tokens.next_token()?;
        if Repetition::from_keyword(entry_repetition.text) != Some(Repetition::Repeated)
            || entry_keyword.text != GROUP
        {
            return Err(self.structural(format!(
                "{kind} body must start with 'repeated group {entry_name}', found '{} {}'",
                entry_repetition.text, entry_keyword.text
            )));
        }

        self.check_depth(depth + 1)?;
        let entry_field_id = self.parse_field_id()?;
        let entry = self.expect_identifier()?.text;
        if entry != entry_name {
            return Err(self.schema_error(SchemaError::SugarEntryName {
                kind,
                expected: entry_name,
                found: entry.to_string(),
            }));
        }

        self.tokens.expect(&["{"])?;
        let children = self.parse_fields(depth + 1)?;
        let entry = GroupNode::new(entry_name, Repetition::Repeated, children)
            .with_field_id(entry_field_id);

        let group = match logical_type {
            LogicalType::Map => GroupNode::map(name, repetition, entry),
            _ => GroupNode::list(name, repetition, entry),
        }
        .map_err(|e| self.schema_error(e))?;

        self.tokens.expect(&["}"])?;
        Ok(group)
    }

    fn parse_sugar_kind(&self, token: Token<'a>, name: &str) -> Result<LogicalType, DslError> {
        let text = token.text;
        if text.eq_ignore_ascii_case("map") {
            Ok(LogicalType::Map)
        } else if text.eq_ignore_ascii_case("list") {
            Ok(LogicalType::List)
        } else if ["string", "utf8", "timestamp"]
            .iter()
            .any(|k| text.eq_ignore_ascii_case(k))
        {
            Err(self.schema_error(SchemaError::MisplacedLogicalType {
                logical: text.to_string(),
                name: name.to_string(),
            }))
        } else {
            Err(DslError::UnknownLogicalType {
                found: text.to_string(),
                location: self.tokens.location(),
            })
        }
    }
}

/// Parse schema text into its root group.
///
/// The root is always a [`SchemaNode::Group`]. The first error aborts the
/// parse and carries the line where it was detected.
pub fn parse(source: &str) -> Result<SchemaNode, DslError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse schema text with explicit limits.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<SchemaNode, DslError> {
    let mut parser = Parser::new(source, options);
    let root = parser.parse_schema()?;
    tracing::debug!(
        root = root.name(),
        depth = root.depth(),
        "parsed schema"
    );
    Ok(root)
}

/// Read the whole stream, then parse it.
pub fn parse_reader(mut reader: impl Read) -> Result<SchemaNode, DslError> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|e| DslError::Io {
            message: e.to_string(),
        })?;
    parse(&source)
}
