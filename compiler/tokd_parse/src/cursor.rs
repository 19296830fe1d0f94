//! Token cursor for navigating the token stream.

use tokd_ir::Span;
use tokd_lexer::{Token, TokenKind};

/// Cursor over a lexed pattern. The last token is always `Eof`.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
    /// Span of the most recently consumed token.
    prev: Span,
}

impl Cursor {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Cursor {
            tokens,
            pos: 0,
            prev: Span::default(),
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    #[inline]
    pub(crate) fn kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn span(&self) -> Span {
        self.current().span
    }

    /// Consume the current token and return it. Never moves past `Eof`.
    pub(crate) fn bump(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        self.prev = token.span;
        token
    }

    #[inline]
    pub(crate) fn prev_span(&self) -> Span {
        self.prev
    }
}
