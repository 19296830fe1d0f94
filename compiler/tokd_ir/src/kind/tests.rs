use super::*;
use pretty_assertions::assert_eq;

#[test]
fn quantity_suffixes() {
    assert_eq!(Quantity::ONE.to_string(), "");
    assert_eq!(Quantity::NONE.to_string(), "!");
    assert_eq!(Quantity::OPTIONAL.to_string(), "?");
    assert_eq!(Quantity::ANY.to_string(), "*");
    assert_eq!(Quantity::SOME.to_string(), "+");
    assert_eq!(Quantity::at_least(3).to_string(), "{3+}");
    assert_eq!(Quantity::exactly(2).to_string(), "{2}");
    assert_eq!(Quantity::range(2, 5).map(|q| q.to_string()), Some("{2-5}".to_string()));
}

#[test]
fn exactly_zero_is_the_negative_assertion() {
    assert_eq!(Quantity::exactly(0), Quantity::NONE);
    assert!(Quantity::NONE.is_negative());
    assert!(!Quantity::OPTIONAL.is_negative());
}

#[test]
fn range_rejects_inverted_bounds() {
    assert_eq!(Quantity::range(3, 2), None);
    assert_eq!(Quantity::range(2, 2), Some(Quantity::exactly(2)));
}

#[test]
fn wants_more_respects_bounds() {
    assert!(Quantity::SOME.wants_more(1_000));
    assert!(Quantity::exactly(2).wants_more(1));
    assert!(!Quantity::exactly(2).wants_more(2));
}

#[test]
fn kinds_are_ranked() {
    assert!(PatternKind::Literal < PatternKind::Basics);
    assert!(PatternKind::Basics < PatternKind::Derived);
    assert!(PatternKind::Derived < PatternKind::Experimental);
    assert!(PatternKind::Experimental.is_derived_or_above());
    assert!(!PatternKind::Basics.is_derived_or_above());
}

#[test]
fn kind_round_trips_through_text() {
    for kind in PatternKind::ALL {
        assert_eq!(kind.to_string().parse::<PatternKind>(), Ok(kind));
    }
    assert_eq!(
        "Trivial".parse::<PatternKind>(),
        Err(ParseKindError("Trivial".into()))
    );
}
