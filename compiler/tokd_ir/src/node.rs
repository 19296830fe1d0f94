//! Pattern tree nodes.
//!
//! A compiled pattern is a tree whose root is always an [`NodeKind::Alternation`]
//! of sequences. `A B | C` is one alternation with the sequences `[A, B]` and
//! `[C]`. A parenthesized group nested in a sequence is another alternation
//! node, which is what lets `(B C)+` carry its own quantifier.

use crate::{Look, PatternId, Quantity};

/// One alternative of an alternation: nodes matched left to right.
pub type Sequence = Vec<PatternNode>;

/// What a node matches.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// Match another registered pattern.
    Reference(PatternId),
    /// Try each sequence in order; the first that matches fully wins.
    Alternation(Vec<Sequence>),
}

/// A tree node: what it matches plus repetition and look-around metadata.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PatternNode {
    pub kind: NodeKind,
    pub quantity: Quantity,
    pub look: Look,
}

impl PatternNode {
    /// Plain `{1,1}` reference.
    pub fn reference(id: PatternId) -> Self {
        PatternNode {
            kind: NodeKind::Reference(id),
            quantity: Quantity::ONE,
            look: Look::Here,
        }
    }

    /// Plain `{1,1}` alternation.
    pub fn alternation(alternatives: Vec<Sequence>) -> Self {
        PatternNode {
            kind: NodeKind::Alternation(alternatives),
            quantity: Quantity::ONE,
            look: Look::Here,
        }
    }

    /// Plain single-sequence group.
    pub fn sequence(elements: Sequence) -> Self {
        Self::alternation(vec![elements])
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_look(mut self, look: Look) -> Self {
        self.look = look;
        self
    }

    /// `{1,1}` and `Here`: the node neither repeats nor looks around.
    #[inline]
    pub fn is_plain(&self) -> bool {
        self.quantity.is_one() && self.look == Look::Here
    }

    /// Visit every reference anywhere in the tree, depth first.
    pub fn for_each_reference(&self, f: &mut impl FnMut(PatternId)) {
        tokd_stack::with_stack(|| match &self.kind {
            NodeKind::Reference(id) => f(*id),
            NodeKind::Alternation(alts) => {
                for node in alts.iter().flatten() {
                    node.for_each_reference(f);
                }
            }
        });
    }

    /// Whether `target` is referenced anywhere in this tree, at any depth.
    pub fn depends_on(&self, target: PatternId) -> bool {
        tokd_stack::with_stack(|| match &self.kind {
            NodeKind::Reference(id) => *id == target,
            NodeKind::Alternation(alts) => alts.iter().flatten().any(|n| n.depends_on(target)),
        })
    }
}
