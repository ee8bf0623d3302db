use std::ops::Range;

use logos::{Logos, SpannedIter};

use crate::token::{Token, TokenKind};

/// Lazy token stream over schema source text.
///
/// Delimiters (whitespace, `,;{}()=`) are yielded as one-character tokens and
/// runs of other characters as a single `Word`. No token is empty. ASCII
/// control characters other than tab, carriage return and newline match no
/// token and are yielded as `Err` with their byte range.
pub struct Lexer<'a> {
    source: &'a str,
    inner: SpannedIter<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source).spanned(),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, Range<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (result, range) = self.inner.next()?;
        Some(match result {
            Ok(kind) => Ok(Token {
                kind,
                text: &self.source[range.clone()],
                offset: range.start,
            }),
            Err(()) => Err(range),
        })
    }
}
