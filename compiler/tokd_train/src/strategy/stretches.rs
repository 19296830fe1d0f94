use rustc_hash::FxHashMap;
use tokd_chart::Chart;
use tokd_ir::PatternId;

use super::{ProposalContext, ProposalStrategy};

/// Proposes patterns from contiguous runs of tokens.
///
/// A run of one pattern `P` (two or more tokens) suggests `<P! P+`. A run
/// alternating between two patterns `A B A B ...` of at least
/// `min_alternation_stretch` tokens suggests `(A B)+` when it has even
/// length and `A (B A)*` when odd. Runs are gathered over all charts of the
/// iteration; only the candidate covering the most characters in each
/// family is proposed, and candidates that already exist are skipped.
#[derive(Copy, Clone, Debug, Default)]
pub struct StretchStrategy;

#[derive(Default)]
struct Alternating {
    covered: u64,
    even: bool,
    odd: bool,
}

/// Follow tokens cycling through `ids` from `start`; returns how many were
/// found and where the run ends.
fn walk(chart: &Chart, start: usize, ids: &[PatternId]) -> (usize, usize) {
    let mut count = 0;
    let mut pos = start;
    while let Some(token) = chart.lookup_head(pos, ids[count % ids.len()]) {
        count += 1;
        pos = token.end();
    }
    (count, pos)
}

struct Existing<'a, 'b> {
    cx: &'a ProposalContext<'b>,
    seen: FxHashMap<String, bool>,
}

impl Existing<'_, '_> {
    fn check(&mut self, text: String) -> bool {
        let cx = self.cx;
        *self.seen.entry(text).or_insert_with_key(|text| cx.exists(text))
    }
}

impl ProposalStrategy for StretchStrategy {
    fn name(&self) -> &'static str {
        "stretches"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(charts = cx.charts.len()))]
    fn propose(&mut self, cx: &ProposalContext<'_>) -> Vec<String> {
        let mut existing = Existing {
            cx,
            seen: FxHashMap::default(),
        };
        let mut repetitions: FxHashMap<PatternId, u64> = FxHashMap::default();
        let mut alternations: FxHashMap<(PatternId, PatternId), Alternating> = FxHashMap::default();

        for chart in cx.charts {
            let mut repeat_end: FxHashMap<PatternId, usize> = FxHashMap::default();
            let mut alternate_end: FxHashMap<(PatternId, PatternId), usize> = FxHashMap::default();

            for pos in 0..chart.len() {
                for first in chart.heads_at(pos) {
                    let a = first.pattern;
                    if !cx.is_candidate(a) {
                        continue;
                    }

                    if repeat_end.get(&a).map_or(true, |&end| pos >= end) {
                        let (count, end) = walk(chart, pos, &[a]);
                        if count > 1 {
                            repeat_end.insert(a, end);
                            let id = cx.identity(a);
                            if !existing.check(format!("<{id}! {id}+")) {
                                *repetitions.entry(a).or_default() += (end - pos) as u64;
                            }
                        }
                    }

                    let next = first.end();
                    if next >= chart.len() || chart.lookup_head(next, a).is_some() {
                        continue;
                    }
                    for second in chart.heads_at(next) {
                        let b = second.pattern;
                        if b == a || !cx.is_candidate(b) {
                            continue;
                        }
                        if alternate_end.get(&(a, b)).is_some_and(|&end| pos < end) {
                            continue;
                        }
                        let (count, end) = walk(chart, pos, &[a, b]);
                        if count < cx.config.min_alternation_stretch {
                            continue;
                        }
                        alternate_end.insert((a, b), end);
                        let text = alternation_text(cx, a, b, count % 2 == 0);
                        if !existing.check(text) {
                            let entry = alternations.entry((a, b)).or_default();
                            entry.covered += (end - pos) as u64;
                            if count % 2 == 0 {
                                entry.even = true;
                            } else {
                                entry.odd = true;
                            }
                        }
                    }
                }
            }
        }

        let mut proposals = Vec::new();
        if let Some((a, covered)) = repetitions
            .into_iter()
            .max_by(|x, y| x.1.cmp(&y.1).then(y.0.cmp(&x.0)))
        {
            tracing::trace!(pattern = a.raw(), covered, "best repetition");
            let id = cx.identity(a);
            proposals.push(format!("<{id}! {id}+"));
        }
        if let Some(((a, b), best)) = alternations
            .into_iter()
            .max_by(|x, y| x.1.covered.cmp(&y.1.covered).then(y.0.cmp(&x.0)))
        {
            tracing::trace!(first = a.raw(), second = b.raw(), covered = best.covered, "best alternation");
            if best.even {
                proposals.push(alternation_text(cx, a, b, true));
            }
            if best.odd {
                proposals.push(alternation_text(cx, a, b, false));
            }
        }
        proposals
    }
}

fn alternation_text(cx: &ProposalContext<'_>, a: PatternId, b: PatternId, even: bool) -> String {
    let (a, b) = (cx.identity(a), cx.identity(b));
    if even {
        format!("({a} {b})+")
    } else {
        format!("{a} ({b} {a})*")
    }
}
