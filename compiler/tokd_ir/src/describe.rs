//! Canonical text descriptions of pattern trees.
//!
//! A description is rendered from a reduced tree, so it is valid pattern text
//! that compiles back to the same tree. Rendering rules:
//! - the root alternation is bare: `A B | C`
//! - nested groups are always parenthesized: `A (B | C)+`
//! - look-around is a prefix (`<`, `>`), repetition a suffix (`!`, `?`, `*`,
//!   `+`, `{n}`, `{n+}`, `{n-m}`)
//!
//! Before rendering, references are inlined according to [`DescribeMode`] and
//! the result is reduced again. Inlining before reduction is what makes
//! `describe(compile(describe(p))) == describe(p)` hold when `p` references
//! nameless sub-patterns.
//!
//! Under a look-behind only plain content is valid pattern text, so there a
//! nameless reference is inlined only when its whole tree is plain; otherwise
//! it stays `[id]`.

use crate::{reduce, Look, NodeKind, PatternBody, PatternId, PatternNode, PatternRegistry, Sequence};

/// How references to other patterns are rendered.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DescribeMode {
    /// Named references by identity; nameless compound references inlined,
    /// except under a look-behind where the inlined tree would not be plain.
    #[default]
    Shallow,
    /// Named references by identity, nameless ones as `[id]`. Nothing inlined.
    Ids,
    /// Every compound reference inlined; literals rendered as quoted text.
    /// Used only to compare patterns for functional equivalence.
    Full,
}

/// Single-quote `text`, doubling embedded quotes.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

impl PatternRegistry {
    /// Describe a registered pattern. Literals render as quoted text.
    pub fn describe(&self, id: PatternId, mode: DescribeMode) -> String {
        match self.get(id).map(|p| &p.body) {
            Some(PatternBody::Literal(text)) => quote(text),
            Some(PatternBody::Tree(root)) => self.describe_tree(root, mode),
            None => id.to_string(),
        }
    }

    /// Describe an arbitrary tree against this registry.
    pub fn describe_tree(&self, root: &PatternNode, mode: DescribeMode) -> String {
        let mut tree = self.expand(root, mode, false);
        reduce(&mut tree);
        let mut out = String::new();
        self.render_top(&tree, mode, &mut out);
        out
    }

    /// Human label: the identity of a named pattern, the shallow description
    /// of a nameless one.
    pub fn label(&self, id: PatternId) -> String {
        match self.get(id) {
            Some(pattern) if pattern.name.is_some() => pattern.identity(),
            Some(_) => self.describe(id, DescribeMode::Shallow),
            None => id.to_string(),
        }
    }

    /// The tree to inline in place of a reference to `id`, if any.
    /// `behind` is set when the reference sits in a look-behind.
    fn inline_target(
        &self,
        id: PatternId,
        mode: DescribeMode,
        behind: bool,
    ) -> Option<&PatternNode> {
        let pattern = self.get(id)?;
        let root = pattern.root()?;
        match mode {
            DescribeMode::Full => Some(root),
            DescribeMode::Shallow if behind => {
                (pattern.name.is_none() && all_plain(root)).then_some(root)
            }
            DescribeMode::Shallow => pattern.name.is_none().then_some(root),
            DescribeMode::Ids => None,
        }
    }

    fn expand(&self, node: &PatternNode, mode: DescribeMode, behind: bool) -> PatternNode {
        let behind = behind || node.look == Look::Behind;
        tokd_stack::with_stack(|| match &node.kind {
            NodeKind::Reference(id) => match self.inline_target(*id, mode, behind) {
                Some(root) => PatternNode {
                    kind: self.expand(root, mode, behind).kind,
                    quantity: node.quantity,
                    look: node.look,
                },
                None => node.clone(),
            },
            NodeKind::Alternation(alts) => PatternNode {
                kind: NodeKind::Alternation(
                    alts.iter()
                        .map(|seq| seq.iter().map(|n| self.expand(n, mode, behind)).collect())
                        .collect(),
                ),
                quantity: node.quantity,
                look: node.look,
            },
        })
    }

    fn render_top(&self, node: &PatternNode, mode: DescribeMode, out: &mut String) {
        match &node.kind {
            NodeKind::Alternation(alts) if node.is_plain() => self.render_alts(alts, mode, out),
            _ => self.render_element(node, mode, out),
        }
    }

    fn render_alts(&self, alts: &[Sequence], mode: DescribeMode, out: &mut String) {
        for (i, seq) in alts.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            for (j, node) in seq.iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                self.render_element(node, mode, out);
            }
        }
    }

    fn render_element(&self, node: &PatternNode, mode: DescribeMode, out: &mut String) {
        tokd_stack::with_stack(|| {
            out.push_str(node.look.prefix());
            match &node.kind {
                NodeKind::Reference(id) => out.push_str(&self.atom(*id, mode)),
                NodeKind::Alternation(alts) => {
                    out.push('(');
                    self.render_alts(alts, mode, out);
                    out.push(')');
                }
            }
            out.push_str(&node.quantity.to_string());
        });
    }

    fn atom(&self, id: PatternId, mode: DescribeMode) -> String {
        match (self.get(id), mode) {
            (None, _) => id.to_string(),
            (Some(pattern), DescribeMode::Full) => match &pattern.body {
                PatternBody::Literal(text) => quote(text),
                PatternBody::Tree(_) => pattern.identity(),
            },
            (Some(pattern), _) => pattern.identity(),
        }
    }
}

/// Whether `node` and everything below it are plain.
fn all_plain(node: &PatternNode) -> bool {
    tokd_stack::with_stack(|| {
        node.is_plain()
            && match &node.kind {
                NodeKind::Reference(_) => true,
                NodeKind::Alternation(alts) => alts.iter().flatten().all(all_plain),
            }
    })
}
