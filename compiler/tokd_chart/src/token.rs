//! Match results.

use std::fmt;

use tokd_ir::PatternId;

/// Index of a token in its chart's arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TokenId(u32);

impl TokenId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        TokenId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.0)
    }
}

/// One concrete match of a pattern. Positions count characters, not bytes.
///
/// Never mutated once it is in a chart.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    pub pattern: PatternId,
    pub start: usize,
    pub len: usize,
    pub text: String,
    /// Sub-tokens, kept only for Derived-or-above patterns.
    pub children: Vec<TokenId>,
}

impl Token {
    /// One past the last matched character.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A maximal run of characters that no Derived-or-above token covers.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Hole {
    pub start: usize,
    pub len: usize,
    pub text: String,
}
