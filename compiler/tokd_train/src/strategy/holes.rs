use rustc_hash::FxHashMap;

use super::{ProposalContext, ProposalStrategy};

/// Proposes the most frequently repeated uncovered text, spelled out as a
/// sequence of its character literals.
///
/// Holes shorter than two characters are ignored, and a text must occur as
/// a hole at least twice.
///
/// Holes are spelled with Literal patterns, so `min_candidate_kind` does not
/// apply here.
#[derive(Copy, Clone, Debug, Default)]
pub struct HoleStrategy;

impl ProposalStrategy for HoleStrategy {
    fn name(&self) -> &'static str {
        "holes"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(charts = cx.charts.len()))]
    fn propose(&mut self, cx: &ProposalContext<'_>) -> Vec<String> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for chart in cx.charts {
            for hole in chart.find_holes(cx.registry) {
                if hole.len >= 2 {
                    *counts.entry(hole.text).or_default() += 1;
                }
            }
        }

        let mut repeated: Vec<(String, usize)> = counts.into_iter().filter(|(_, n)| *n >= 2).collect();
        repeated.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then(b.0.chars().count().cmp(&a.0.chars().count()))
                .then(a.0.cmp(&b.0))
        });

        for (text, count) in repeated {
            let Some(spelled) = spell(cx, &text) else {
                continue;
            };
            if cx.exists(&spelled) {
                continue;
            }
            tracing::trace!(%text, count, "repeated hole");
            return vec![spelled];
        }
        Vec::new()
    }
}

/// `text` as a sequence of literal references, if every character has one.
fn spell(cx: &ProposalContext<'_>, text: &str) -> Option<String> {
    let parts: Option<Vec<String>> = text
        .chars()
        .map(|ch| cx.registry.literal_for(ch).map(|id| cx.identity(id)))
        .collect();
    Some(parts?.join(" "))
}
