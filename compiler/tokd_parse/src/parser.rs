//! Recursive-descent parser for pattern text.
//!
//! ```text
//! pattern    := sequence ( '|' sequence )*
//! sequence   := term+
//! term       := look? atom quantifier? | '^' atom
//! look       := '<' | '>'
//! atom       := name | quoted | '[' id ']' | '(' pattern ')'
//! quantifier := '!' | '?' | '*' | '+' | '{' n '}' | '{' n '+' '}' | '{' n '-' m '}'
//! ```
//!
//! Juxtaposition binds tighter than `|`, so the root is always an
//! alternation of sequences.

use tokd_ir::{Look, PatternId, PatternNode, PatternRegistry, Quantity, Sequence, Span};
use tokd_lexer::{BraceMax, TokenKind};

use crate::cursor::Cursor;
use crate::validate;
use crate::{CompileError, CompileErrorKind};

pub(crate) struct Parser<'a> {
    cursor: Cursor,
    registry: &'a PatternRegistry,
}

type ParseResult<T> = Result<T, CompileError>;

fn err<T>(kind: CompileErrorKind, span: Span) -> ParseResult<T> {
    Err(CompileError::new(kind, span))
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &str, registry: &'a PatternRegistry) -> Self {
        Parser {
            cursor: Cursor::new(tokd_lexer::lex(text)),
            registry,
        }
    }

    /// Parse the whole text into an (unreduced) root alternation.
    pub(crate) fn parse_root(&mut self) -> ParseResult<PatternNode> {
        let alternatives = self.parse_alternatives(None)?;
        Ok(PatternNode::alternation(alternatives))
    }

    /// Parse `seq ( '|' seq )*` up to `)` (inside a group) or end of input.
    ///
    /// `open` is the span of the group's `(`, or `None` at the top level.
    fn parse_alternatives(&mut self, open: Option<Span>) -> ParseResult<Vec<Sequence>> {
        let mut alternatives = Vec::new();
        let mut sequence = Sequence::new();

        loop {
            match self.cursor.kind() {
                TokenKind::Pipe => {
                    if sequence.is_empty() {
                        return err(CompileErrorKind::EmptyAlternative, self.cursor.span());
                    }
                    alternatives.push(std::mem::take(&mut sequence));
                    self.cursor.bump();
                }
                TokenKind::RParen => {
                    if open.is_none() {
                        return err(CompileErrorKind::UnexpectedCloseParen, self.cursor.span());
                    }
                    break;
                }
                TokenKind::Eof => {
                    if let Some(open) = open {
                        return err(CompileErrorKind::UnclosedParen, open);
                    }
                    break;
                }
                _ => sequence.push(self.parse_term()?),
            }
        }

        if sequence.is_empty() {
            let kind = if alternatives.is_empty() && open.is_none() {
                CompileErrorKind::EmptyPattern
            } else {
                CompileErrorKind::EmptyAlternative
            };
            return err(kind, self.cursor.span());
        }
        alternatives.push(sequence);
        Ok(alternatives)
    }

    /// Parse one sequence element with its look marker and quantifier.
    fn parse_term(&mut self) -> ParseResult<PatternNode> {
        let start = self.cursor.span();
        let (look, none_prior) = match self.cursor.kind() {
            TokenKind::Behind => (Look::Behind, false),
            TokenKind::Ahead => (Look::Ahead, false),
            TokenKind::NonePrior => (Look::Behind, true),
            _ => (Look::Here, false),
        };
        if look != Look::Here {
            self.cursor.bump();
            match self.cursor.kind() {
                TokenKind::Behind | TokenKind::Ahead | TokenKind::NonePrior => {
                    return err(CompileErrorKind::DoubleLook, self.cursor.span());
                }
                kind if kind.is_quantifier() => {
                    return err(CompileErrorKind::QuantifierAfterLook, self.cursor.span());
                }
                TokenKind::Pipe | TokenKind::RParen | TokenKind::Eof => {
                    return err(CompileErrorKind::LookWithoutAtom, self.cursor.span());
                }
                _ => {}
            }
        }

        let atom = self.parse_atom()?;

        if none_prior {
            if self.cursor.kind().is_quantifier() {
                return err(CompileErrorKind::QuantifierWithoutAtom, self.cursor.span());
            }
            let node = atom.with_look(Look::Behind).with_quantity(Quantity::NONE);
            validate::check_look_behind(&node, start.merge(self.cursor.prev_span()))?;
            return Ok(node);
        }

        let quantity = if self.cursor.kind().is_quantifier() {
            let quantity = self.parse_quantifier()?;
            if self.cursor.kind().is_quantifier() {
                return err(CompileErrorKind::QuantifierWithoutAtom, self.cursor.span());
            }
            quantity
        } else {
            Quantity::ONE
        };

        let node = atom.with_look(look).with_quantity(quantity);
        if look == Look::Behind {
            validate::check_look_behind(&node, start.merge(self.cursor.prev_span()))?;
        }
        Ok(node)
    }

    fn parse_atom(&mut self) -> ParseResult<PatternNode> {
        let span = self.cursor.span();
        match self.cursor.kind().clone() {
            TokenKind::Name(name) | TokenKind::Quoted(name) => {
                self.cursor.bump();
                match self.registry.id_of(&name) {
                    Some(id) => Ok(PatternNode::reference(id)),
                    None => err(CompileErrorKind::UnknownName(name), span),
                }
            }
            TokenKind::Id(raw) => {
                self.cursor.bump();
                let id = PatternId::new(number(raw, span)?);
                if self.registry.contains(id) {
                    Ok(PatternNode::reference(id))
                } else {
                    err(CompileErrorKind::UnknownId(raw), span)
                }
            }
            TokenKind::LParen => {
                self.cursor.bump();
                let alternatives =
                    tokd_stack::with_stack(|| self.parse_alternatives(Some(span)))?;
                // parse_alternatives only returns Ok at `)` when given `open`
                self.cursor.bump();
                Ok(PatternNode::alternation(alternatives))
            }
            TokenKind::Error => err(CompileErrorKind::InvalidCharacter, span),
            kind if kind.is_quantifier() => err(CompileErrorKind::QuantifierWithoutAtom, span),
            TokenKind::RParen => err(CompileErrorKind::UnexpectedCloseParen, span),
            _ => err(CompileErrorKind::EmptyAlternative, span),
        }
    }

    fn parse_quantifier(&mut self) -> ParseResult<Quantity> {
        let token = self.cursor.bump();
        let quantity = match token.kind {
            TokenKind::Bang => Quantity::NONE,
            TokenKind::Question => Quantity::OPTIONAL,
            TokenKind::Star => Quantity::ANY,
            TokenKind::Plus => Quantity::SOME,
            TokenKind::Braces { min, max } => {
                let low = number(min, token.span)?;
                match max {
                    BraceMax::Exact => Quantity::exactly(low),
                    BraceMax::Unbounded => Quantity::at_least(low),
                    BraceMax::UpTo(high) => {
                        let high_n = number(high, token.span)?;
                        match Quantity::range(low, high_n) {
                            Some(quantity) => quantity,
                            None => {
                                return err(
                                    CompileErrorKind::InvalidRange { min, max: high },
                                    token.span,
                                )
                            }
                        }
                    }
                }
            }
            _ => return err(CompileErrorKind::QuantifierWithoutAtom, token.span),
        };
        Ok(quantity)
    }
}

/// Narrow a lexed number to `u32`.
fn number(raw: u64, span: Span) -> ParseResult<u32> {
    match u32::try_from(raw) {
        Ok(n) => Ok(n),
        Err(_) => err(CompileErrorKind::NumberTooLarge(raw), span),
    }
}
