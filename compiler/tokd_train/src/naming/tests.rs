#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn alphabet() -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    crate::init_alphabet(&mut registry).unwrap();
    registry
}

fn shapes() -> Vec<NamedShape> {
    crate::TrainerConfig::default().shapes
}

#[test]
fn promotes_a_matching_experiment() {
    let mut registry = alphabet();
    let id = tokd_parse::register_experiment(&mut registry, "<Letter! Letter+")
        .unwrap()
        .id();

    let mut events: Vec<TrainingEvent> = Vec::new();
    let named = name_known_shapes(&mut registry, &shapes(), &mut events);

    assert_eq!(named, vec![id]);
    let word = registry.get(id).unwrap();
    assert_eq!(word.name(), Some("Word"));
    assert_eq!(word.kind(), PatternKind::Derived);
    assert_eq!(
        events,
        vec![TrainingEvent::Named {
            id,
            name: "Word".to_string(),
        }]
    );
}

#[test]
fn matches_by_behavior_not_text() {
    let mut registry = alphabet();
    let id = tokd_parse::register_experiment(&mut registry, "<(Uppercase | Lowercase)! Letter{1+}")
        .unwrap()
        .id();
    assert_eq!(name_known_shapes(&mut registry, &shapes(), &mut Vec::new()), vec![id]);
    assert_eq!(registry.id_of("Word"), Some(id));
}

#[test]
fn leaves_named_patterns_alone() {
    let mut registry = alphabet();
    let id = tokd_parse::register(&mut registry, Some("Count"), PatternKind::Basics, "<Digit! Digit+")
        .unwrap()
        .id();

    assert!(name_known_shapes(&mut registry, &shapes(), &mut Vec::new()).is_empty());
    assert_eq!(registry.get(id).unwrap().name(), Some("Count"));
    assert_eq!(registry.id_of("Number"), None);
}

#[test]
fn later_shapes_may_use_earlier_names() {
    let mut registry = alphabet();
    let word = tokd_parse::register_experiment(&mut registry, "<Letter! Letter+")
        .unwrap()
        .id();
    let phrase = tokd_parse::register_experiment(
        &mut registry,
        &format!("<({word} Space)! ({word} Space)+ {word}"),
    )
    .unwrap()
    .id();

    let named = name_known_shapes(&mut registry, &shapes(), &mut Vec::new());
    assert_eq!(named, vec![word, phrase]);
    assert_eq!(registry.id_of("Phrase"), Some(phrase));
}
