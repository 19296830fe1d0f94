#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use tokd_ir::RegisterError;

use crate::CompileErrorKind;

fn registry() -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    for ch in ["A", "B", "C"] {
        registry.register_literal(Some(ch), ch).unwrap();
    }
    registry
}

#[test]
fn functional_duplicates_are_not_registered_twice() {
    let mut registry = registry();
    let first = register(&mut registry, Some("AB"), PatternKind::Derived, "A B").unwrap();
    assert!(first.is_new());
    let size = registry.len();

    for text in ["A (B)", "(A B)", "((A) B)", "[0] [1]"] {
        let again = register_experiment(&mut registry, text).unwrap();
        assert_eq!(again, Registration::Existing(first.id()), "{text}");
    }
    assert_eq!(registry.len(), size);
    assert_eq!(registry.get(first.id()).unwrap().name(), Some("AB"));
}

#[test]
fn nameless_intermediates_do_not_hide_duplicates() {
    let mut registry = registry();
    let bc = register_experiment(&mut registry, "B C").unwrap().id();
    let via_ref = register_experiment(&mut registry, &format!("A {bc}+")).unwrap();
    let spelled = register_experiment(&mut registry, "A (B C)+").unwrap();
    assert!(via_ref.is_new());
    assert_eq!(spelled, Registration::Existing(via_ref.id()));
}

#[test]
fn single_references_collapse_onto_the_referenced_pattern() {
    let mut registry = registry();
    let a = registry.id_of("A").unwrap();
    assert_eq!(
        register_experiment(&mut registry, "A").unwrap(),
        Registration::Existing(a)
    );
    assert_eq!(
        register_experiment(&mut registry, "(A)").unwrap(),
        Registration::Existing(a)
    );
}

#[test]
fn pattern_exists_compares_full_depth() {
    let mut registry = registry();
    assert_eq!(pattern_exists(&registry, "A+ B").unwrap(), None);
    let id = register_experiment(&mut registry, "A+ B").unwrap().id();
    assert_eq!(pattern_exists(&registry, "(A)+ (B)").unwrap(), Some(id));
    assert_eq!(pattern_exists(&registry, "A* B").unwrap(), None);
    assert_eq!(
        pattern_exists(&registry, "+ A").unwrap_err().kind,
        CompileErrorKind::QuantifierWithoutAtom
    );
}

#[test]
fn failures_leave_the_registry_untouched() {
    let mut registry = registry();
    let size = registry.len();
    let next = registry.next_id();

    let err = register(&mut registry, Some("X"), PatternKind::Derived, "A (B").unwrap_err();
    assert!(matches!(err, RegisterTextError::Compile(_)));

    let err = register(&mut registry, Some("A"), PatternKind::Derived, "B C").unwrap_err();
    assert_eq!(
        err,
        RegisterTextError::Register(RegisterError::DuplicateName("A".to_string()))
    );

    assert_eq!(registry.len(), size);
    assert_eq!(registry.next_id(), next);
    assert_eq!(registry.id_of("X"), None);
}

#[test]
fn experiments_are_nameless_and_experimental() {
    let mut registry = registry();
    let id = register_experiment(&mut registry, "A B C").unwrap().id();
    let pattern = registry.get(id).unwrap();
    assert_eq!(pattern.name(), None);
    assert_eq!(pattern.kind(), PatternKind::Experimental);
}
