//! Pluggable proposal strategies.
//!
//! Each iteration, every enabled strategy looks at the fresh survey and the
//! charts it was taken from and returns pattern texts to try. The trainer
//! registers them through the duplicate-detecting path, so proposing a
//! pattern that already exists is harmless.

mod holes;
mod pairs;
mod stretches;

pub use holes::HoleStrategy;
pub use pairs::PairStrategy;
pub use stretches::StretchStrategy;

use tokd_chart::Chart;
use tokd_ir::{PatternId, PatternRegistry};

use crate::{Survey, TrainerConfig};

/// What a strategy gets to look at.
pub struct ProposalContext<'a> {
    pub registry: &'a PatternRegistry,
    pub survey: &'a Survey,
    pub charts: &'a [Chart],
    pub config: &'a TrainerConfig,
}

impl ProposalContext<'_> {
    /// Whether `id` may be combined into a proposal.
    pub fn is_candidate(&self, id: PatternId) -> bool {
        self.registry
            .get(id)
            .is_some_and(|p| p.kind() >= self.config.min_candidate_kind)
    }

    /// Text form of `id` usable inside a proposal.
    pub fn identity(&self, id: PatternId) -> String {
        self.registry
            .get(id)
            .map_or_else(|| id.to_string(), tokd_ir::Pattern::identity)
    }

    /// Whether an equivalent of `text` is already registered. Text that
    /// does not compile counts as existing, so it is never proposed.
    pub fn exists(&self, text: &str) -> bool {
        !matches!(tokd_parse::pattern_exists(self.registry, text), Ok(None))
    }
}

pub trait ProposalStrategy {
    /// Short name used in events.
    fn name(&self) -> &'static str;

    /// Pattern texts to register as experiments.
    fn propose(&mut self, cx: &ProposalContext<'_>) -> Vec<String>;
}

/// Strategies for the enabled members of `set`, in a fixed order.
pub fn strategies_for(set: crate::StrategySet) -> Vec<Box<dyn ProposalStrategy>> {
    let mut strategies: Vec<Box<dyn ProposalStrategy>> = Vec::new();
    if set.pairs {
        strategies.push(Box::new(PairStrategy::default()));
    }
    if set.stretches {
        strategies.push(Box::new(StretchStrategy));
    }
    if set.holes {
        strategies.push(Box::new(HoleStrategy));
    }
    strategies
}
