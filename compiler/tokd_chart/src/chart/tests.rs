#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use tokd_ir::{PatternDef, PatternNode};

fn token(pattern: PatternId, start: usize, text: &str) -> Token {
    Token {
        pattern,
        start,
        len: text.chars().count(),
        text: text.to_string(),
        children: Vec::new(),
    }
}

/// Literal `a` (0), a Derived `Word` (1) and a nameless Experimental (2).
fn registry() -> (PatternRegistry, PatternId, PatternId, PatternId) {
    let mut registry = PatternRegistry::new();
    let a = registry.register_literal(Some("a"), "a").unwrap();
    let word = registry
        .register(PatternDef::tree(
            Some("Word".to_string()),
            PatternKind::Derived,
            PatternNode::sequence(vec![PatternNode::reference(a)]),
        ))
        .unwrap();
    let experiment = registry
        .register(PatternDef::tree(
            None,
            PatternKind::Experimental,
            PatternNode::sequence(vec![PatternNode::reference(a), PatternNode::reference(a)]),
        ))
        .unwrap();
    (registry, a, word, experiment)
}

#[test]
fn add_indexes_heads_and_tails() {
    let (_, a, word, _) = registry();
    let mut chart = Chart::new("abcd");
    let id = chart.add(token(word, 1, "bc"));
    chart.add(token(a, 0, "a"));

    assert_eq!(chart.lookup_head(1, word).unwrap().text, "bc");
    assert_eq!(chart.lookup_tail(2, word).unwrap().start, 1);
    assert_eq!(chart.lookup_head(2, word), None);
    assert_eq!(chart.memo(1, word), Some(id));
    assert_eq!(chart.heads_at(0).len(), 1);
    assert_eq!(chart.tails_before(3).len(), 1);
    assert!(chart.tails_before(0).is_empty());
}

#[test]
fn heads_are_never_overwritten() {
    let (_, _, word, _) = registry();
    let mut chart = Chart::new("abcd");
    let first = chart.add(token(word, 0, "ab"));
    let second = chart.add(token(word, 0, "abc"));
    assert_eq!(first, second);
    assert_eq!(chart.lookup_head(0, word).unwrap().len, 2);
    assert_eq!(chart.tokens().count(), 1);
}

#[test]
fn later_tails_replace_earlier_ones() {
    let (_, _, word, _) = registry();
    let mut chart = Chart::new("abcd");
    chart.add(token(word, 0, "abc"));
    chart.add(token(word, 1, "bc"));
    assert_eq!(chart.lookup_tail(2, word).unwrap().start, 1);
    assert_eq!(chart.lookup_head(0, word).unwrap().len, 3);
}

#[test]
fn zero_width_tokens_are_memoized_but_not_indexed() {
    let (_, a, _, _) = registry();
    let mut chart = Chart::new("ab");
    let id = chart.add(token(a, 1, ""));
    assert_eq!(chart.memo(1, a), Some(id));
    assert_eq!(chart.lookup_head(1, a), None);
    assert!(chart.heads_at(1).is_empty());
}

#[test]
fn top_tokens_span_the_whole_text() {
    let (_, a, word, experiment) = registry();
    let mut chart = Chart::new("abc");
    chart.add(token(a, 0, "a"));
    chart.add(token(experiment, 0, "abc"));
    chart.add(token(word, 0, "abc"));
    let top: Vec<PatternId> = chart.top_tokens().iter().map(|t| t.pattern).collect();
    assert_eq!(top, vec![word, experiment]);
}

#[test]
fn finds_the_single_uncovered_run() {
    let (registry, a, word, _) = registry();
    let mut chart = Chart::new("abcdefg");
    chart.add(token(word, 0, "ab"));
    chart.add(token(word, 5, "fg"));
    // Literals do not count as coverage.
    chart.add(token(a, 2, "c"));

    assert_eq!(
        chart.find_holes(&registry),
        vec![Hole {
            start: 2,
            len: 3,
            text: "cde".to_string(),
        }]
    );
}

#[test]
fn holes_at_both_ends_and_whole_text() {
    let (registry, _, word, _) = registry();
    let mut chart = Chart::new("abcdef");
    chart.add(token(word, 2, "cd"));
    let holes: Vec<(usize, usize)> = chart
        .find_holes(&registry)
        .iter()
        .map(|h| (h.start, h.len))
        .collect();
    assert_eq!(holes, vec![(0, 2), (4, 2)]);

    let bare = Chart::new("xyz");
    assert_eq!(bare.find_holes(&registry).len(), 1);
    assert!(Chart::new("").find_holes(&registry).is_empty());
}

#[test]
fn dump_lists_tokens_by_position() {
    let (registry, a, word, experiment) = registry();
    let mut chart = Chart::new("aab");
    chart.add(token(a, 0, "a"));
    chart.add(token(word, 0, "a"));
    chart.add(token(experiment, 0, "aa"));

    assert_eq!(
        chart.dump(&registry, PatternKind::Basics),
        "----------  0  -  a  ----------\n  Word: a\n  [2]: aa  | a a\n"
    );
    assert_eq!(
        chart.dump(&registry, PatternKind::Literal),
        "----------  0  -  a  ----------\n  a: a\n  Word: a\n  [2]: aa  | a a\n"
    );
    assert_eq!(Chart::new("aab").dump(&registry, PatternKind::Literal), "<empty>");
}
