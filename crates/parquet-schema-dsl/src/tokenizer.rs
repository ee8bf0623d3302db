use std::collections::VecDeque;
use std::ops::Range;

use crate::error::{DslError, Location};
use crate::lexer::Lexer;
use crate::token::Token;

/// Whitespace-skipping token cursor with one token of lookahead.
///
/// Tokens pulled from the lexer while peeking are held in a FIFO buffer and
/// replayed in source order, so peeking never changes what `next_token`
/// returns or how lines are counted.
pub struct Tokenizer<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    pending: VecDeque<Token<'a>>,
    line: usize,
    line_text: String,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            pending: VecDeque::new(),
            line: 1,
            line_text: String::new(),
            offset: 0,
        }
    }

    /// Consumes and returns the next non-whitespace token.
    pub fn next_token(&mut self) -> Result<Token<'a>, DslError> {
        loop {
            let token = match self.pending.pop_front() {
                Some(token) => token,
                None => match self.lexer.next() {
                    Some(Ok(token)) => token,
                    Some(Err(range)) => return Err(self.invalid_token(range)),
                    None => return Err(self.end_of_input()),
                },
            };
            self.observe(&token);
            if !token.is_whitespace() {
                return Ok(token);
            }
        }
    }

    /// Returns the next non-whitespace token without consuming it.
    pub fn peek_token(&mut self) -> Result<Token<'a>, DslError> {
        if let Some(token) = self.pending.iter().find(|t| !t.is_whitespace()) {
            return Ok(*token);
        }
        loop {
            match self.lexer.next() {
                Some(Ok(token)) => {
                    self.pending.push_back(token);
                    if !token.is_whitespace() {
                        return Ok(token);
                    }
                }
                Some(Err(range)) => return Err(self.invalid_token(range)),
                None => return Err(self.end_of_input()),
            }
        }
    }

    /// Consumes the next token and checks it against the allowed texts.
    pub fn expect(&mut self, expected: &[&str]) -> Result<Token<'a>, DslError> {
        let token = self.next_token()?;
        if expected.contains(&token.text) {
            Ok(token)
        } else {
            Err(DslError::UnexpectedToken {
                expected: expected.iter().map(|s| s.to_string()).collect(),
                found: token.text.to_string(),
                location: self.location(),
            })
        }
    }

    /// True when only whitespace is left in the input.
    pub fn is_exhausted(&mut self) -> Result<bool, DslError> {
        match self.peek_token() {
            Ok(_) => Ok(false),
            Err(DslError::UnexpectedEndOfInput { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// The line and partial line text as of the last consumed token.
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            line_text: self.line_text.clone(),
            offset: self.offset,
        }
    }

    fn observe(&mut self, token: &Token<'a>) {
        self.offset = token.offset;
        if token.text == "\n" {
            self.line += 1;
            self.line_text.clear();
        } else {
            self.line_text.push_str(token.text);
        }
    }

    fn invalid_token(&self, range: Range<usize>) -> DslError {
        let mut location = self.location();
        location.offset = range.start;
        DslError::InvalidToken {
            text: self.source[range].to_string(),
            location,
        }
    }

    fn end_of_input(&self) -> DslError {
        let mut location = self.location();
        location.offset = self.source.len();
        DslError::UnexpectedEndOfInput { location }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_whitespace() {
        let mut t = Tokenizer::new("  required \n\tgroup");
        assert_eq!(t.next_token().unwrap().text, "required");
        assert_eq!(t.next_token().unwrap().text, "group");
    }

    #[test]
    fn peek_is_idempotent() {
        let mut t = Tokenizer::new("a  b");
        assert_eq!(t.next_token().unwrap().text, "a");
        assert_eq!(t.peek_token().unwrap().text, "b");
        assert_eq!(t.peek_token().unwrap().text, "b");
        assert_eq!(t.next_token().unwrap().text, "b");
        assert!(t.is_exhausted().unwrap());
    }

    #[test]
    fn peek_does_not_disturb_line_tracking() {
        let mut peeked = Tokenizer::new("x\n\n  y");
        let mut plain = Tokenizer::new("x\n\n  y");

        peeked.next_token().unwrap();
        plain.next_token().unwrap();
        assert_eq!(peeked.peek_token().unwrap().text, "y");
        // Peeking consumes nothing, so the location is still on line 1.
        assert_eq!(peeked.location().line, 1);

        peeked.next_token().unwrap();
        plain.next_token().unwrap();
        assert_eq!(peeked.location(), plain.location());
        assert_eq!(peeked.location().line, 3);
        assert_eq!(peeked.location().line_text, "  y");
    }

    #[test]
    fn line_text_accumulates() {
        let mut t = Tokenizer::new("required group schema {\n  required int32 a;");
        for _ in 0..6 {
            t.next_token().unwrap();
        }
        let loc = t.location();
        assert_eq!(loc.line, 2);
        assert_eq!(loc.line_text, "  required int32");
        assert_eq!(loc.offset, 35);
    }

    #[test]
    fn end_of_input() {
        let mut t = Tokenizer::new(" \n ");
        assert!(matches!(
            t.peek_token(),
            Err(DslError::UnexpectedEndOfInput { .. })
        ));
        assert!(matches!(
            t.next_token(),
            Err(DslError::UnexpectedEndOfInput { .. })
        ));
        assert!(t.is_exhausted().unwrap());
    }

    #[test]
    fn expect_accepts_member_of_set() {
        let mut t = Tokenizer::new(", )");
        assert_eq!(t.expect(&[",", ")"]).unwrap().text, ",");
        assert_eq!(t.expect(&[",", ")"]).unwrap().text, ")");
    }

    #[test]
    fn expect_reports_found_token() {
        let mut t = Tokenizer::new("group x }");
        t.next_token().unwrap();
        t.next_token().unwrap();
        let err = t.expect(&["{"]).unwrap_err();
        assert_eq!(
            err,
            DslError::UnexpectedToken {
                expected: vec!["{".into()],
                found: "}".into(),
                location: Location {
                    line: 1,
                    line_text: "group x }".into(),
                    offset: 8,
                },
            }
        );
    }
}
