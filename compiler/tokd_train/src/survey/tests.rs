#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use tokd_chart::MatchLimits;

/// `A` = [0], `B` = [1], `Run` = [2] (`<A! A+`, Basics).
fn registry() -> PatternRegistry {
    let mut registry = PatternRegistry::new();
    registry.register_literal(Some("A"), "A").unwrap();
    registry.register_literal(Some("B"), "B").unwrap();
    tokd_parse::register(&mut registry, Some("Run"), PatternKind::Basics, "<A! A+").unwrap();
    registry
}

fn surveyed(registry: &PatternRegistry, texts: &[&str]) -> Survey {
    let mut survey = Survey::new(8);
    for text in texts {
        let chart = tokd_chart::parse(registry, text, MatchLimits::default());
        survey.record(registry, &chart);
    }
    survey
}

fn id(n: u32) -> PatternId {
    PatternId::new(n)
}

#[test]
fn counts_matches_and_coverage() {
    let registry = registry();
    let survey = surveyed(&registry, &["AAB"]);

    assert_eq!(survey.charts(), 1);
    assert_eq!(survey.tokens(), 4);
    assert_eq!(
        survey.stats(id(0)),
        Some(&PatternStats {
            matches: 2,
            coverage: 2,
            longest: 1,
            stretch: 1,
            examples: vec!["A".to_string()],
        })
    );
    assert_eq!(
        survey.stats(id(2)),
        Some(&PatternStats {
            matches: 1,
            coverage: 2,
            longest: 2,
            stretch: 2,
            examples: vec!["AA".to_string()],
        })
    );
    assert_eq!(survey.stats(id(1)).map(|s| s.stretch), Some(0));
}

#[test]
fn coverage_adds_up_across_charts() {
    let registry = registry();
    let survey = surveyed(&registry, &["AAB", "BAA"]);
    let run = survey.stats(id(2)).unwrap();
    assert_eq!(run.matches, 2);
    assert_eq!(run.coverage, 4);
    assert_eq!(run.stretch, 2);
}

#[test]
fn adjacent_tokens_are_counted_as_pairs() {
    let registry = registry();
    let survey = surveyed(&registry, &["AAB"]);

    assert_eq!(
        survey.pairs(),
        vec![
            (PairKey::Repeat(id(0)), 1),
            (PairKey::Sequence(id(0), id(1)), 1),
            (PairKey::Sequence(id(2), id(1)), 1),
        ]
    );
    assert_eq!(survey.pair_count(PairKey::new(id(1), id(0))), 0);
}

#[test]
fn pair_key_distinguishes_repeats() {
    assert_eq!(PairKey::new(id(3), id(3)), PairKey::Repeat(id(3)));
    assert_eq!(PairKey::new(id(3), id(4)), PairKey::Sequence(id(3), id(4)));
    assert!(PairKey::Sequence(id(3), id(4)).involves(id(4)));
    assert!(!PairKey::Repeat(id(3)).involves(id(4)));
}

#[test]
fn examples_are_distinct_and_capped() {
    let mut registry = registry();
    tokd_parse::register(&mut registry, Some("AB"), PatternKind::Basics, "A | B").unwrap();
    let mut survey = Survey::new(1);
    let chart = tokd_chart::parse(&registry, "ABBA", MatchLimits::default());
    survey.record(&registry, &chart);

    assert_eq!(survey.stats(id(3)).unwrap().matches, 4);
    assert_eq!(survey.stats(id(3)).unwrap().examples, vec!["A".to_string()]);
}

#[test]
fn covers_patterns_known_at_survey_time() {
    let mut registry = registry();
    let survey = surveyed(&registry, &["A"]);
    let later = tokd_parse::register_experiment(&mut registry, "A B").unwrap().id();

    assert!(survey.covers(id(2)));
    assert!(!survey.covers(later));
}

#[test]
fn clear_keeps_the_example_cap() {
    let registry = registry();
    let mut survey = surveyed(&registry, &["AAB"]);
    survey.clear();
    assert_eq!(survey.charts(), 0);
    assert!(survey.stats(id(0)).is_none());
    assert!(survey.pairs().is_empty());
    assert!(!survey.covers(id(0)));
}

#[test]
fn report_lists_basics_and_above() {
    let registry = registry();
    let survey = surveyed(&registry, &["AAB"]);
    let report = survey.report(&registry, 10);

    assert_eq!(report.len(), 1);
    assert_eq!(report[0].label, "Run");
    assert_eq!(report[0].kind, PatternKind::Basics);
    assert_eq!(report[0].to_string(), "- 2 - [2] - Run (1 matches)\n  | 'AA'");
    assert!(survey.report(&registry, 0).is_empty());
}
