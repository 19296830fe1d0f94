//! Trainer configuration.

use std::fmt;
use std::str::FromStr;

use tokd_chart::MatchLimits;
use tokd_ir::PatternKind;

/// Which proposal strategies run each iteration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StrategySet {
    pub pairs: bool,
    pub stretches: bool,
    pub holes: bool,
}

impl StrategySet {
    pub const ALL: StrategySet = StrategySet {
        pairs: true,
        stretches: true,
        holes: true,
    };

    pub const NONE: StrategySet = StrategySet {
        pairs: false,
        stretches: false,
        holes: false,
    };

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }
}

impl Default for StrategySet {
    fn default() -> Self {
        StrategySet {
            pairs: true,
            stretches: false,
            holes: true,
        }
    }
}

/// Error for an unrecognized strategy name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown strategy `{0}` (expected pairs, stretches, holes or all)")]
pub struct ParseStrategyError(pub String);

/// Parses `pairs`, `stretches`, `holes`, `all`, or a comma-separated list.
impl FromStr for StrategySet {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut set = StrategySet::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_ascii_lowercase().as_str() {
                "pairs" => set.pairs = true,
                "stretches" => set.stretches = true,
                "holes" => set.holes = true,
                "all" => set = StrategySet::ALL,
                _ => return Err(ParseStrategyError(part.to_string())),
            }
        }
        if set.is_empty() {
            return Err(ParseStrategyError(s.to_string()));
        }
        Ok(set)
    }
}

impl fmt::Display for StrategySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.pairs, "pairs"),
            (self.stretches, "stretches"),
            (self.holes, "holes"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        f.write_str(&names.join(","))
    }
}

/// A known building block: when a pattern with this behavior turns up, it
/// is promoted to Derived and given `name`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedShape {
    pub name: String,
    pub text: String,
}

impl NamedShape {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        NamedShape {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Tunables for the induction loop.
#[derive(Clone, Debug)]
pub struct TrainerConfig {
    pub iterations: usize,
    /// A pair must occur strictly more often than this to be proposed.
    pub pair_threshold: u64,
    pub max_pair_proposals: usize,
    /// Patterns below this kind are never combined into proposals.
    pub min_candidate_kind: PatternKind,
    /// Experimental patterns surviving each cull.
    pub keep_experiments: usize,
    /// Distinct example texts kept per pattern in the survey.
    pub example_cap: usize,
    /// Tokens needed in an alternating run before it is proposed.
    pub min_alternation_stretch: usize,
    pub strategies: StrategySet,
    pub cull: bool,
    /// Checked in order, so a shape may use names given by earlier ones.
    pub shapes: Vec<NamedShape>,
    pub match_limits: MatchLimits,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            iterations: 1,
            pair_threshold: 3,
            max_pair_proposals: 50,
            min_candidate_kind: PatternKind::Basics,
            keep_experiments: 30,
            example_cap: 8,
            min_alternation_stretch: 4,
            strategies: StrategySet::default(),
            cull: true,
            shapes: vec![
                NamedShape::new("Word", "<Letter! Letter+"),
                NamedShape::new("Number", "<Digit! Digit+"),
                NamedShape::new("Spaces", "<Space! Space+"),
                NamedShape::new("Phrase", "<(Word Space)! (Word Space)+ Word"),
            ],
            match_limits: MatchLimits::default(),
        }
    }
}
