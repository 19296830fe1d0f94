//! Per-text match index (the token chain).
//!
//! `heads[p]` maps a pattern to the token it produced starting at `p`;
//! `tails[p]` maps a pattern to a token whose last character is at `p`.
//! Every non-empty token is in both. Zero-width matches live in a separate
//! memo keyed by `(position, pattern)` and never appear in the indices.

use std::fmt::Write;

use rustc_hash::{FxHashMap, FxHashSet};
use tokd_ir::{PatternId, PatternKind, PatternRegistry};

use crate::{Hole, Token, TokenId};

#[derive(Clone, Debug, Default)]
pub struct Chart {
    text: Vec<char>,
    tokens: Vec<Token>,
    heads: Vec<FxHashMap<PatternId, TokenId>>,
    tails: Vec<FxHashMap<PatternId, TokenId>>,
    empties: FxHashMap<(usize, PatternId), TokenId>,
    misses: FxHashSet<(usize, PatternId)>,
}

impl Chart {
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let len = text.len();
        Chart {
            text,
            tokens: Vec::new(),
            heads: vec![FxHashMap::default(); len],
            tails: vec![FxHashMap::default(); len],
            empties: FxHashMap::default(),
            misses: FxHashSet::default(),
        }
    }

    /// The parsed text, one entry per character.
    pub fn chars(&self) -> &[char] {
        &self.text
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Length of the text in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Characters `start..end`, clamped to the text.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.text.len());
        let start = start.min(end);
        self.text[start..end].iter().collect()
    }

    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    /// Every token in insertion order, zero-width ones included.
    pub fn tokens(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (TokenId::new(i as u32), t))
    }

    /// Insert a token.
    ///
    /// A pattern has at most one token per start position. If one is already
    /// recorded there, it is kept and its id returned. A later token ending at
    /// the same position replaces the earlier tail entry.
    pub fn add(&mut self, token: Token) -> TokenId {
        let (start, pattern) = (token.start, token.pattern);
        if token.is_empty() {
            if let Some(existing) = self.empties.get(&(start, pattern)) {
                return *existing;
            }
        } else if let Some(existing) = self.heads.get(start).and_then(|h| h.get(&pattern)) {
            return *existing;
        }

        let id = TokenId::new(self.tokens.len() as u32);
        if token.is_empty() {
            self.empties.insert((start, pattern), id);
        } else if token.end() <= self.text.len() {
            self.heads[start].insert(pattern, id);
            self.tails[token.end() - 1].insert(pattern, id);
        }
        self.tokens.push(token);
        id
    }

    /// The non-empty token for `pattern` starting at `pos`.
    pub fn lookup_head(&self, pos: usize, pattern: PatternId) -> Option<&Token> {
        let id = self.heads.get(pos)?.get(&pattern)?;
        Some(self.token(*id))
    }

    /// A token for `pattern` whose last character is at `pos`.
    pub fn lookup_tail(&self, pos: usize, pattern: PatternId) -> Option<&Token> {
        let id = self.tails.get(pos)?.get(&pattern)?;
        Some(self.token(*id))
    }

    /// Memoized result at `(pos, pattern)`: the token (possibly zero-width)
    /// if the pattern matched there before.
    pub(crate) fn memo(&self, pos: usize, pattern: PatternId) -> Option<TokenId> {
        self.heads
            .get(pos)
            .and_then(|h| h.get(&pattern))
            .or_else(|| self.empties.get(&(pos, pattern)))
            .copied()
    }

    pub(crate) fn tail_id(&self, pos: usize, pattern: PatternId) -> Option<TokenId> {
        self.tails.get(pos)?.get(&pattern).copied()
    }

    pub(crate) fn is_miss(&self, pos: usize, pattern: PatternId) -> bool {
        self.misses.contains(&(pos, pattern))
    }

    pub(crate) fn add_miss(&mut self, pos: usize, pattern: PatternId) {
        self.misses.insert((pos, pattern));
    }

    /// Non-empty tokens starting at `pos`, ordered by pattern id.
    pub fn heads_at(&self, pos: usize) -> Vec<&Token> {
        let Some(heads) = self.heads.get(pos) else {
            return Vec::new();
        };
        let mut tokens: Vec<&Token> = heads.values().map(|id| self.token(*id)).collect();
        tokens.sort_by_key(|t| t.pattern);
        tokens
    }

    /// Non-empty tokens ending just before `end`, ordered by pattern id.
    pub fn tails_before(&self, end: usize) -> Vec<&Token> {
        let Some(tails) = end.checked_sub(1).and_then(|last| self.tails.get(last)) else {
            return Vec::new();
        };
        let mut tokens: Vec<&Token> = tails.values().map(|id| self.token(*id)).collect();
        tokens.sort_by_key(|t| t.pattern);
        tokens
    }

    /// Tokens that span the whole text.
    pub fn top_tokens(&self) -> Vec<&Token> {
        self.heads_at(0)
            .into_iter()
            .filter(|t| t.len == self.text.len())
            .collect()
    }

    /// Maximal runs of characters covered by no Derived-or-above token.
    pub fn find_holes(&self, registry: &PatternRegistry) -> Vec<Hole> {
        let mut covered = vec![false; self.text.len()];
        for token in &self.tokens {
            let derived = registry
                .get(token.pattern)
                .is_some_and(|p| p.kind().is_derived_or_above());
            if derived {
                let end = token.end().min(covered.len());
                for slot in &mut covered[token.start.min(end)..end] {
                    *slot = true;
                }
            }
        }

        let mut holes = Vec::new();
        let mut start = None;
        for (pos, is_covered) in covered.iter().copied().chain(std::iter::once(true)).enumerate() {
            match (start, is_covered) {
                (None, false) => start = Some(pos),
                (Some(from), true) => {
                    holes.push(Hole {
                        start: from,
                        len: pos - from,
                        text: self.slice(from, pos),
                    });
                    start = None;
                }
                _ => {}
            }
        }
        holes
    }

    /// Human-readable listing of tokens at or above `min_kind`, by start
    /// position.
    pub fn dump(&self, registry: &PatternRegistry, min_kind: PatternKind) -> String {
        let mut out = String::new();
        for (pos, ch) in self.text.iter().enumerate() {
            let mut lines = String::new();
            for token in self.heads_at(pos) {
                let Some(pattern) = registry.get(token.pattern) else {
                    continue;
                };
                if pattern.kind() < min_kind {
                    continue;
                }
                let _ = write!(lines, "  {}: {}", pattern.identity(), token.text);
                if pattern.name().is_none() {
                    let _ = write!(
                        lines,
                        "  | {}",
                        registry.describe(token.pattern, tokd_ir::DescribeMode::Shallow)
                    );
                }
                lines.push('\n');
            }
            if !lines.is_empty() {
                let _ = writeln!(out, "----------  {pos}  -  {ch}  ----------");
                out.push_str(&lines);
            }
        }
        if out.is_empty() {
            out.push_str("<empty>");
        }
        out
    }
}

#[cfg(test)]
mod tests;
