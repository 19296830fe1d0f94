//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before names
//! are copied out of the source and quoted names are unescaped.

use logos::{Lexer, Logos};

use crate::BraceMax;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
pub(crate) enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("|")]
    Pipe,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("^")]
    Caret,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,

    // `{n}`, `{n+}`, `{n-m}`
    #[regex(r"\{\s*[0-9]+\s*(-\s*[0-9]+\s*|\+\s*)?\}", braces)]
    Braces((u64, BraceMax)),

    // `[n]`
    #[regex(r"\[\s*[0-9]+\s*\]", |lex| digits(lex.slice()))]
    Id(u64),

    #[regex(r"[A-Za-z][-_A-Za-z0-9]*")]
    Name,

    #[regex(r"'([^']|'')+'")]
    Quoted,
}

fn braces(lex: &mut Lexer<RawToken>) -> (u64, BraceMax) {
    let inner = lex.slice().trim_start_matches('{').trim_end_matches('}').trim();
    if let Some(min) = inner.strip_suffix('+') {
        (digits(min), BraceMax::Unbounded)
    } else if let Some((min, max)) = inner.split_once('-') {
        (digits(min), BraceMax::UpTo(digits(max)))
    } else {
        (digits(inner), BraceMax::Exact)
    }
}

/// Decimal value of the digits in `s`, saturating at `u64::MAX`.
///
/// Anything but ASCII digits is ignored, so brackets and padding can be
/// passed through unchanged.
fn digits(s: &str) -> u64 {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0_u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}
