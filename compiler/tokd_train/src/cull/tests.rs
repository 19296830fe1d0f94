#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use tokd_chart::MatchLimits;

fn registry() -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    registry.register_literal(Some("a"), "a").unwrap();
    registry.register_literal(Some("b"), "b").unwrap();
    registry
}

fn experiment(registry: &mut PatternRegistry, text: &str) -> PatternId {
    let registration = tokd_parse::register_experiment(registry, text).unwrap();
    assert!(registration.is_new());
    registration.id()
}

fn survey(registry: &PatternRegistry, text: &str) -> Survey {
    let mut survey = Survey::new(4);
    survey.record(registry, &tokd_chart::parse(registry, text, MatchLimits::default()));
    survey
}

#[test]
fn keeps_the_best_scoring_experiments() {
    let mut registry = registry();
    let ab = experiment(&mut registry, "a b");
    let ba = experiment(&mut registry, "b a");
    let survey = survey(&registry, "abab");

    let mut events: Vec<TrainingEvent> = Vec::new();
    let removed = cull(&mut registry, &survey, 1, &mut events);

    assert_eq!(removed, vec![ba]);
    assert!(registry.contains(ab));
    assert!(!registry.contains(ba));
    assert!(matches!(
        events.as_slice(),
        [TrainingEvent::Culled { id, description, .. }] if *id == ba && description == "b a"
    ));
}

#[test]
fn leaves_other_kinds_and_unsurveyed_experiments_alone() {
    let mut registry = registry();
    let derived = tokd_parse::register(&mut registry, Some("AB"), PatternKind::Derived, "a b")
        .unwrap()
        .id();
    let survey = survey(&registry, "abab");
    let fresh = experiment(&mut registry, "b a");

    let removed = cull(&mut registry, &survey, 0, &mut Vec::new());

    assert!(removed.is_empty());
    assert!(registry.contains(derived));
    assert!(registry.contains(fresh));
}

#[test]
fn referenced_experiments_survive_until_their_dependents_go() {
    let mut registry = registry();
    let first = experiment(&mut registry, "a b");
    let second = experiment(&mut registry, &format!("{first} a"));
    let third = tokd_parse::register(
        &mut registry,
        Some("Top"),
        PatternKind::Derived,
        &format!("{second} b"),
    )
    .unwrap()
    .id();
    let survey = survey(&registry, "abab");

    let mut events: Vec<TrainingEvent> = Vec::new();
    let removed = cull(&mut registry, &survey, 0, &mut events);
    assert!(removed.is_empty());
    assert_eq!(
        events,
        vec![
            TrainingEvent::CullBlocked {
                id: second,
                dependents: vec![third],
            },
            TrainingEvent::CullBlocked {
                id: first,
                dependents: vec![second],
            },
        ]
    );

    registry.unregister(third).unwrap();
    let removed = cull(&mut registry, &survey, 0, &mut Vec::new());
    assert_eq!(removed, vec![second, first]);
    assert_eq!(registry.len(), 2);
}
