//! Look-behind restrictions.
//!
//! A look-behind is evaluated by walking backwards from the current
//! position, which only works for elements that match exactly once and
//! consume what they match. So a `<` node may itself be `{1,1}` (must be
//! preceded by) or `{0,0}` (must not be preceded by), and everything
//! nested inside it must be plain.
//!
//! Reduction never turns a valid look-behind into an invalid one or back,
//! so terms are checked as parsed, while their source span is still known.

use tokd_ir::{Look, NodeKind, PatternNode, Quantity, Span};

use crate::{CompileError, CompileErrorKind};

/// Check a parsed look-behind term, reporting `span` (the whole term) on
/// failure.
pub(crate) fn check_look_behind(term: &PatternNode, span: Span) -> Result<(), CompileError> {
    visit(term, false).map_err(|kind| CompileError::new(kind, span))
}

fn visit(node: &PatternNode, inside: bool) -> Result<(), CompileErrorKind> {
    tokd_stack::with_stack(|| {
        if inside {
            if node.look != Look::Here {
                return Err(CompileErrorKind::LookAroundInLookBehind);
            }
            if !node.quantity.is_one() {
                return Err(CompileErrorKind::QuantifierInLookBehind);
            }
        }
        let behind = node.look == Look::Behind;
        if behind && node.quantity != Quantity::ONE && node.quantity != Quantity::NONE {
            return Err(CompileErrorKind::QuantifierInLookBehind);
        }
        if let NodeKind::Alternation(alternatives) = &node.kind {
            for child in alternatives.iter().flatten() {
                visit(child, inside || behind)?;
            }
        }
        Ok(())
    })
}
