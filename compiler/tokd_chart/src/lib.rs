//! Chart matching for tokd patterns.
//!
//! [`parse`] tries every registered pattern at every character position of
//! a text and records each non-empty match in a [`Chart`]. The chart is the
//! memo table of the [`Matcher`] and, afterwards, the input of the
//! trainer's survey.
//!
//! Matching never fails with an error: no match is `None`.

mod chart;
mod matcher;
mod token;

pub use chart::Chart;
pub use matcher::{MatchLimits, Matcher};
pub use token::{Hole, Token, TokenId};

use tokd_ir::PatternRegistry;

/// Parse `text` against every registered pattern.
#[tracing::instrument(level = "debug", skip_all, fields(chars = text.chars().count(), patterns = registry.len()))]
pub fn parse(registry: &PatternRegistry, text: &str, limits: MatchLimits) -> Chart {
    let ids = registry.ids();
    let mut matcher = Matcher::with_limits(registry, text, limits);
    let len = matcher.chart().len();

    for pos in 0..len {
        matcher.set_frontier(pos);
        for &id in &ids {
            matcher.match_at(id, pos);
        }
    }

    let chart = matcher.into_chart();
    tracing::debug!(
        tokens = chart.tokens().count(),
        top = chart.top_tokens().len(),
        "parse complete"
    );
    chart
}
