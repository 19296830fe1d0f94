//! Greedy, memoized pattern matcher.
//!
//! Matching commits to the first alternative that matches fully and to the
//! longest run of repetitions it can collect; it never backtracks into an
//! earlier decision. Every `(position, pattern)` result, hit or miss, is
//! memoized in the [`Chart`], which both keeps whole-text parses linear in
//! the number of patterns and lets self-referential patterns terminate.
//!
//! Look-behind is answered from the chart's tail index. During a whole-text
//! parse every pattern has already been tried at every position before the
//! current one, so the index is complete there; positions past that
//! frontier are filled in on demand.

use rustc_hash::FxHashSet;
use tokd_ir::{Look, NodeKind, PatternBody, PatternId, PatternNode, PatternRegistry, Sequence};

use crate::{Chart, Token, TokenId};

/// Recursion bounds for tree descent.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MatchLimits {
    /// Maximum nesting of node matches (pattern references included).
    pub max_depth: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        MatchLimits { max_depth: 256 }
    }
}

/// Matches registered patterns against one text, filling its chart.
pub struct Matcher<'r> {
    registry: &'r PatternRegistry,
    chart: Chart,
    limits: MatchLimits,
    depth: usize,
    /// Every position before this one has been tried with every pattern.
    frontier: usize,
    /// `(position, pattern)` pairs currently being matched.
    active: FxHashSet<(usize, PatternId)>,
    /// Bumped whenever a result was cut short by the depth limit or a
    /// cycle; such misses are not memoized.
    cut_offs: u64,
    /// Cut-offs caused by the depth limit alone.
    depth_cut_offs: u64,
}

impl<'r> Matcher<'r> {
    pub fn new(registry: &'r PatternRegistry, text: &str) -> Self {
        Self::with_limits(registry, text, MatchLimits::default())
    }

    pub fn with_limits(registry: &'r PatternRegistry, text: &str, limits: MatchLimits) -> Self {
        Matcher {
            registry,
            chart: Chart::new(text),
            limits,
            depth: 0,
            frontier: 0,
            active: FxHashSet::default(),
            cut_offs: 0,
            depth_cut_offs: 0,
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn into_chart(self) -> Chart {
        self.chart
    }

    /// How many node matches the depth limit has cut short.
    pub fn depth_cut_offs(&self) -> u64 {
        self.depth_cut_offs
    }

    pub(crate) fn set_frontier(&mut self, pos: usize) {
        self.frontier = pos;
    }

    /// Match pattern `id` at `start`, returning its token.
    pub fn match_at(&mut self, id: PatternId, start: usize) -> Option<&Token> {
        let token = self.match_pattern(id, start)?;
        Some(self.chart.token(token))
    }

    /// Match an unregistered tree at `start`, returning the consumed length.
    pub fn match_tree(&mut self, node: &PatternNode, start: usize) -> Option<usize> {
        let mut children = Vec::new();
        self.match_node(node, start, &mut children)
    }

    fn match_pattern(&mut self, id: PatternId, start: usize) -> Option<TokenId> {
        if let Some(token) = self.chart.memo(start, id) {
            return Some(token);
        }
        if self.chart.is_miss(start, id) {
            return None;
        }
        let registry = self.registry;
        let pattern = registry.get(id)?;

        let mut children = Vec::new();
        let len = match pattern.body() {
            PatternBody::Literal(text) => self.match_literal(text, start),
            PatternBody::Tree(root) => {
                if !self.active.insert((start, id)) {
                    // Left recursion: the pattern needs itself at the same position.
                    self.cut_offs += 1;
                    return None;
                }
                let cut_offs = self.cut_offs;
                let len = self.match_node(root, start, &mut children);
                self.active.remove(&(start, id));
                if len.is_none() && self.cut_offs != cut_offs {
                    return None;
                }
                len
            }
        };

        let Some(len) = len else {
            self.chart.add_miss(start, id);
            return None;
        };
        if !pattern.kind().is_derived_or_above() {
            children.clear();
        }
        let token = Token {
            pattern: id,
            start,
            len,
            text: self.chart.slice(start, start + len),
            children,
        };
        Some(self.chart.add(token))
    }

    fn match_literal(&self, text: &str, start: usize) -> Option<usize> {
        let chars = self.chart.chars();
        let mut pos = start;
        for expected in text.chars() {
            if chars.get(pos) != Some(&expected) {
                return None;
            }
            pos += 1;
        }
        Some(pos - start)
    }

    /// Match `node` at `start`; on success returns the consumed length and
    /// leaves the sub-tokens in `children`.
    fn match_node(
        &mut self,
        node: &PatternNode,
        start: usize,
        children: &mut Vec<TokenId>,
    ) -> Option<usize> {
        if self.depth >= self.limits.max_depth {
            if self.depth_cut_offs == 0 {
                tracing::warn!(max_depth = self.limits.max_depth, start, "match depth limit reached");
            }
            self.depth_cut_offs += 1;
            self.cut_offs += 1;
            return None;
        }
        self.depth += 1;
        let result = tokd_stack::with_stack(|| self.match_node_inner(node, start, children));
        self.depth -= 1;
        result
    }

    fn match_node_inner(
        &mut self,
        node: &PatternNode,
        start: usize,
        children: &mut Vec<TokenId>,
    ) -> Option<usize> {
        if node.look == Look::Behind {
            let found = self.behind(&node.kind, start).is_some();
            return (found != node.quantity.is_negative()).then_some(0);
        }

        let mark = children.len();
        if node.quantity.is_negative() {
            let found = self.match_once(&node.kind, start, children).is_some();
            children.truncate(mark);
            return (!found).then_some(0);
        }

        let mut count: u32 = 0;
        let mut len = 0;
        while node.quantity.wants_more(count) {
            match self.match_once(&node.kind, start + len, children) {
                Some(0) => {
                    // Repeating an empty match changes nothing.
                    count = count.saturating_add(1).max(node.quantity.min);
                    break;
                }
                Some(n) => {
                    count += 1;
                    len += n;
                }
                None => break,
            }
        }

        if count < node.quantity.min {
            children.truncate(mark);
            return None;
        }
        if node.look == Look::Ahead {
            children.truncate(mark);
            return Some(0);
        }
        Some(len)
    }

    /// One submatch of a node's content, ignoring quantity and look.
    fn match_once(
        &mut self,
        kind: &NodeKind,
        start: usize,
        children: &mut Vec<TokenId>,
    ) -> Option<usize> {
        match kind {
            NodeKind::Reference(id) => {
                let token = self.match_pattern(*id, start)?;
                children.push(token);
                Some(self.chart.token(token).len)
            }
            NodeKind::Alternation(alternatives) => {
                alternatives
                    .iter()
                    .find_map(|sequence| self.match_sequence(sequence, start, children))
            }
        }
    }

    fn match_sequence(
        &mut self,
        sequence: &Sequence,
        start: usize,
        children: &mut Vec<TokenId>,
    ) -> Option<usize> {
        let mark = children.len();
        let mut pos = start;
        for node in sequence {
            let Some(len) = self.match_node(node, pos, children) else {
                children.truncate(mark);
                return None;
            };
            pos += len;
        }
        Some(pos - start)
    }

    /// Where a match of `kind` ending exactly at `end` starts, if one exists.
    fn behind(&mut self, kind: &NodeKind, end: usize) -> Option<usize> {
        match kind {
            NodeKind::Reference(id) => self
                .token_ending_at(*id, end)
                .map(|token| self.chart.token(token).start),
            NodeKind::Alternation(alternatives) => alternatives.iter().find_map(|sequence| {
                sequence
                    .iter()
                    .rev()
                    .try_fold(end, |pos, node| self.behind(&node.kind, pos))
            }),
        }
    }

    /// A token for `id` whose last character is just before `end`.
    fn token_ending_at(&mut self, id: PatternId, end: usize) -> Option<TokenId> {
        let last = end.checked_sub(1)?;
        if let Some(token) = self.chart.tail_id(last, id) {
            return Some(token);
        }
        // Starts before the frontier are already in the chart.
        let from = self.frontier.min(end);
        for start in (from..end).rev() {
            if let Some(token) = self.match_pattern(id, start) {
                if self.chart.token(token).end() == end {
                    return Some(token);
                }
            }
        }
        None
    }
}
