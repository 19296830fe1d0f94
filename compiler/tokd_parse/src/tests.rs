#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use tokd_ir::{DescribeMode, Look, PatternId, Quantity, Span};

/// `A`, `B`, `C` literals and a literal named `(`.
fn registry() -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    for ch in ["A", "B", "C", "("] {
        registry.register_literal(Some(ch), ch).unwrap();
    }
    registry
}

fn r(id: u32) -> PatternNode {
    PatternNode::reference(PatternId::new(id))
}

fn shallow(registry: &PatternRegistry, text: &str) -> String {
    let root = compile(registry, text, None).unwrap();
    registry.describe_tree(&root, DescribeMode::Shallow)
}

fn error_kind(text: &str) -> CompileErrorKind {
    compile(&registry(), text, None).unwrap_err().kind
}

#[test]
fn juxtaposition_binds_tighter_than_pipe() {
    let root = compile(&registry(), "A B | C", None).unwrap();
    assert_eq!(
        root,
        PatternNode::alternation(vec![vec![r(0), r(1)], vec![r(2)]])
    );
}

#[test]
fn groups_are_reduced() {
    let registry = registry();
    assert_eq!(shallow(&registry, "A (B C) A"), "A B C A");
    assert_eq!(shallow(&registry, "(A)+ B"), "A+ B");
    assert_eq!(shallow(&registry, "A | (B | C)"), "A | B | C");
    assert_eq!(shallow(&registry, "((A B))"), "A B");
    assert_eq!(shallow(&registry, "A (B C)+"), "A (B C)+");
}

#[test]
fn quantifiers() {
    let registry = registry();
    let cases = [
        ("A!", Quantity::NONE),
        ("A?", Quantity::OPTIONAL),
        ("A*", Quantity::ANY),
        ("A+", Quantity::SOME),
        ("A{3}", Quantity::exactly(3)),
        ("A{2+}", Quantity::at_least(2)),
        ("A{2-5}", Quantity::range(2, 5).unwrap()),
    ];
    for (text, quantity) in cases {
        let root = compile(&registry, text, None).unwrap();
        assert_eq!(root, PatternNode::sequence(vec![r(0).with_quantity(quantity)]), "{text}");
    }
}

#[test]
fn look_markers() {
    let registry = registry();
    let root = compile(&registry, "<A! B >C", None).unwrap();
    assert_eq!(
        root,
        PatternNode::sequence(vec![
            r(0).with_look(Look::Behind).with_quantity(Quantity::NONE),
            r(1),
            r(2).with_look(Look::Ahead),
        ])
    );
}

#[test]
fn caret_is_none_prior() {
    let registry = registry();
    assert_eq!(
        compile(&registry, "^A B", None).unwrap(),
        compile(&registry, "<A! B", None).unwrap()
    );
    assert_eq!(shallow(&registry, "^(A B) C"), "<(A B)! C");
}

#[test]
fn names_quoted_names_and_ids() {
    let registry = registry();
    assert_eq!(
        compile(&registry, "'(' [1] 'A'", None).unwrap(),
        PatternNode::sequence(vec![r(3), r(1), r(0)])
    );
    assert_eq!(shallow(&registry, "'(' A"), "'(' A");
}

#[test]
fn rejects_malformed_text() {
    let cases = [
        ("", CompileErrorKind::EmptyPattern),
        ("   ", CompileErrorKind::EmptyPattern),
        ("A |", CompileErrorKind::EmptyAlternative),
        ("| A", CompileErrorKind::EmptyAlternative),
        ("A || B", CompileErrorKind::EmptyAlternative),
        ("()", CompileErrorKind::EmptyAlternative),
        ("(A |)", CompileErrorKind::EmptyAlternative),
        ("A )", CompileErrorKind::UnexpectedCloseParen),
        ("(A", CompileErrorKind::UnclosedParen),
        ("(A (B)", CompileErrorKind::UnclosedParen),
        ("+A", CompileErrorKind::QuantifierWithoutAtom),
        ("A+*", CompileErrorKind::QuantifierWithoutAtom),
        ("A (+)", CompileErrorKind::QuantifierWithoutAtom),
        ("^A+", CompileErrorKind::QuantifierWithoutAtom),
        ("<+A", CompileErrorKind::QuantifierAfterLook),
        ("<>A", CompileErrorKind::DoubleLook),
        ("^<A", CompileErrorKind::DoubleLook),
        ("A <", CompileErrorKind::LookWithoutAtom),
        ("(A >)", CompileErrorKind::LookWithoutAtom),
        ("> | A", CompileErrorKind::LookWithoutAtom),
        ("A{5-2}", CompileErrorKind::InvalidRange { min: 5, max: 2 }),
        ("Nope", CompileErrorKind::UnknownName("Nope".to_string())),
        ("'a b'", CompileErrorKind::UnknownName("a b".to_string())),
        ("[99]", CompileErrorKind::UnknownId(99)),
        ("A % B", CompileErrorKind::InvalidCharacter),
        ("[4294967296]", CompileErrorKind::NumberTooLarge(4_294_967_296)),
        ("A{1-4294967296}", CompileErrorKind::NumberTooLarge(4_294_967_296)),
        ("<A+ B", CompileErrorKind::QuantifierInLookBehind),
        ("<(A B?)! C", CompileErrorKind::QuantifierInLookBehind),
        ("<(A >B)! C", CompileErrorKind::LookAroundInLookBehind),
    ];
    for (text, kind) in cases {
        assert_eq!(error_kind(text), kind, "{text:?}");
    }
}

#[test]
fn look_behind_may_hold_plain_sequences_and_alternations() {
    let registry = registry();
    assert_eq!(shallow(&registry, "<(A B | C)! A"), "<(A B | C)! A");
    assert_eq!(shallow(&registry, "<A B"), "<A B");
}

#[test]
fn errors_carry_span_and_pattern_name() {
    let err = compile(&registry(), "A % B", Some("Thing")).unwrap_err();
    assert_eq!(err.span, Span::new(2, 3));
    assert_eq!(err.pattern.as_deref(), Some("Thing"));
    assert_eq!(err.to_string(), "unrecognized character at 2..3 in pattern 'Thing'");

    let err = compile(&registry(), "(A B", None).unwrap_err();
    assert_eq!(err.span, Span::new(0, 1));
    assert_eq!(err.to_string(), "'(' is never closed at 0..1");
}

#[test]
fn look_behind_errors_point_at_the_offending_term() {
    let err = compile(&registry(), "<A+ B", None).unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::QuantifierInLookBehind);
    assert_eq!(err.span, Span::new(0, 3));

    let err = compile(&registry(), "A B <(A >B)! C", None).unwrap_err();
    assert_eq!(err.kind, CompileErrorKind::LookAroundInLookBehind);
    assert_eq!(err.span, Span::new(4, 12));

    let err = compile(&registry(), "A (C | <B*) B", None).unwrap_err();
    assert_eq!(err.span, Span::new(7, 10));
}

#[test]
fn compile_def_keeps_name_and_kind() {
    let def = compile_def(&registry(), Some("Pair"), PatternKind::Derived, "A B").unwrap();
    assert_eq!(def.name.as_deref(), Some("Pair"));
    assert_eq!(def.kind, PatternKind::Derived);
}
