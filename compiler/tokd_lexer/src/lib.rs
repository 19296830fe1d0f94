//! Lexer for the tokd pattern language using logos.
//!
//! ```text
//! Letter+ (Space Word)* | '(' [12]{2-5} ^Digit
//! ```
//!
//! Numbers inside `[..]` and `{..}` are carried as `u64` (saturating); range
//! checks belong to the compiler, which knows which pattern is being compiled.

mod raw_token;

use logos::Logos;
use raw_token::RawToken;
use tokd_ir::Span;

/// Upper bound of a brace quantifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BraceMax {
    /// `{n}`
    Exact,
    /// `{n+}`
    Unbounded,
    /// `{n-m}`
    UpTo(u64),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    Pipe,
    /// `<`
    Behind,
    /// `>`
    Ahead,
    /// `^`, shorthand for `<X!`
    NonePrior,
    Bang,
    Question,
    Star,
    Plus,
    Braces { min: u64, max: BraceMax },
    /// `[n]`
    Id(u64),
    /// Bare name.
    Name(String),
    /// Quoted name, with `''` already collapsed to `'`.
    Quoted(String),
    /// Unrecognized input.
    Error,
    Eof,
}

impl TokenKind {
    /// Whether this token is a postfix quantifier.
    pub fn is_quantifier(&self) -> bool {
        matches!(
            self,
            TokenKind::Bang
                | TokenKind::Question
                | TokenKind::Star
                | TokenKind::Plus
                | TokenKind::Braces { .. }
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the pattern text.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lex pattern text. The result always ends with an `Eof` token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match result {
            Ok(raw) => convert(raw, logos.slice()),
            Err(()) => TokenKind::Error,
        };
        tokens.push(Token::new(kind, span));
    }

    let end = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
    tokens
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Lt => TokenKind::Behind,
        RawToken::Gt => TokenKind::Ahead,
        RawToken::Caret => TokenKind::NonePrior,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Question => TokenKind::Question,
        RawToken::Star => TokenKind::Star,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Braces((min, max)) => TokenKind::Braces { min, max },
        RawToken::Id(id) => TokenKind::Id(id),
        RawToken::Name => TokenKind::Name(slice.to_string()),
        RawToken::Quoted => TokenKind::Quoted(unquote(slice)),
    }
}

/// Strip the surrounding quotes and collapse doubled quotes.
fn unquote(slice: &str) -> String {
    let inner = slice
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(slice);
    inner.replace("''", "'")
}
