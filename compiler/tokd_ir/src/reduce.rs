//! Structural reduction to the canonical tree shape.
//!
//! Runs bottom-up and applies three rewrites, none of which change what the
//! tree matches:
//!
//! 1. **Splice**: a plain single-alternative group inside a sequence is
//!    replaced by its elements (`A (B C) D` → `A B C D`).
//! 2. **Lift**: a group holding exactly one plain element hands its own
//!    quantifier and look-around to that element (`(A)+` → `A+`).
//! 3. **Flatten**: a plain alternation that forms a whole alternative is
//!    merged into the parent's alternatives (`A | (B | C)` → `A | B | C`);
//!    order is preserved, so first-match semantics are unchanged.
//!
//! `(B C)+` is left alone: the quantifier applies to the pair.
//!
//! Two texts that reduce to the same tree are the same pattern, which is what
//! makes description-based duplicate detection sound.

use crate::{Look, NodeKind, PatternNode, Sequence};

/// Reduce `node` in place to canonical form.
pub fn reduce(node: &mut PatternNode) {
    tokd_stack::with_stack(|| {
        let NodeKind::Alternation(alts) = &mut node.kind else {
            return;
        };

        for seq in alts.iter_mut() {
            for child in seq.iter_mut() {
                reduce(child);
            }
            let children = std::mem::take(seq);
            for child in children {
                splice_into(seq, lift(child));
            }
        }

        let mut flat = Vec::with_capacity(alts.len());
        for seq in std::mem::take(alts) {
            match into_plain_alternation(seq) {
                Ok(inner) => flat.extend(inner),
                Err(seq) => flat.push(seq),
            }
        }
        *alts = flat;
    });
}

/// Push `child` onto `seq`, splicing plain single-sequence groups.
fn splice_into(seq: &mut Sequence, child: PatternNode) {
    if child.is_plain() {
        if let NodeKind::Alternation(mut alts) = child.kind {
            if alts.len() == 1 {
                if let Some(inner) = alts.pop() {
                    seq.extend(inner);
                }
            } else {
                seq.push(PatternNode::alternation(alts));
            }
            return;
        }
    }
    seq.push(child);
}

/// Move a group's quantifier and look onto its only element when that
/// element is plain.
fn lift(node: PatternNode) -> PatternNode {
    let PatternNode {
        kind,
        quantity,
        look,
    } = node;
    let alts = match kind {
        NodeKind::Alternation(alts) => alts,
        kind @ NodeKind::Reference(_) => {
            return PatternNode {
                kind,
                quantity,
                look,
            }
        }
    };
    let kind = match <[Sequence; 1]>::try_from(alts) {
        Ok([seq]) => match <[PatternNode; 1]>::try_from(seq) {
            Ok([inner]) if inner.is_plain() => inner.kind,
            Ok([inner]) => NodeKind::Alternation(vec![vec![inner]]),
            Err(seq) => NodeKind::Alternation(vec![seq]),
        },
        Err(alts) => NodeKind::Alternation(alts),
    };
    PatternNode {
        kind,
        quantity,
        look,
    }
}

/// An alternative made of a single plain alternation yields that
/// alternation's sequences; anything else is handed back unchanged.
fn into_plain_alternation(seq: Sequence) -> Result<Vec<Sequence>, Sequence> {
    match <[PatternNode; 1]>::try_from(seq) {
        Ok([PatternNode {
            kind: NodeKind::Alternation(alts),
            quantity,
            look: Look::Here,
        }]) if quantity.is_one() => Ok(alts),
        Ok([node]) => Err(vec![node]),
        Err(seq) => Err(seq),
    }
}
