use logos::Logos;

/// Raw token kinds produced by the schema lexer.
///
/// Every delimiter character is its own token, whitespace included, so the
/// tokenizer can rebuild the current line for diagnostics. Everything between
/// delimiters is a single `Word`, except ASCII control characters, which the
/// lexer rejects.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // -- Whitespace --
    #[regex(r"[ \t\r]")]
    Blank,

    #[token("\n")]
    Newline,

    // -- Punctuation --
    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("=")]
    Equals,

    /// A run of non-delimiter characters: keywords, names, types, literals.
    /// ASCII control characters are not part of any token.
    #[regex(r"[^\x00-\x20\x7F,;{}()=]+")]
    Word,
}

impl TokenKind {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Blank => "whitespace",
            Self::Newline => "newline",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Equals => "'='",
            Self::Word => "word",
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Self::Blank | Self::Newline)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A slice of the source text with its kind and starting byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
