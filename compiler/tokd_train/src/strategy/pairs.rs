use rustc_hash::FxHashSet;

use super::{ProposalContext, ProposalStrategy};
use crate::PairKey;

/// Proposes patterns from frequently adjacent token pairs.
///
/// For a pattern `P` seen twice in a row: `<P! P+`, a run anchored at its
/// first occurrence. For `P` followed by `Q`: `P Q`, plus
/// `<(P Q)! (P Q)+ P` for separator-delimited lists. A pair that produced
/// proposals is retired for the rest of the session.
#[derive(Debug, Default)]
pub struct PairStrategy {
    retired: FxHashSet<PairKey>,
}

impl PairStrategy {
    pub fn is_retired(&self, key: PairKey) -> bool {
        self.retired.contains(&key)
    }
}

impl ProposalStrategy for PairStrategy {
    fn name(&self) -> &'static str {
        "pairs"
    }

    #[tracing::instrument(level = "debug", skip_all, fields(retired = self.retired.len()))]
    fn propose(&mut self, cx: &ProposalContext<'_>) -> Vec<String> {
        let mut proposals = Vec::new();
        let mut taken = 0;

        for (key, count) in cx.survey.pairs() {
            if count <= cx.config.pair_threshold || taken >= cx.config.max_pair_proposals {
                break;
            }
            if self.retired.contains(&key) {
                continue;
            }
            match key {
                PairKey::Repeat(a) => {
                    if !cx.is_candidate(a) {
                        continue;
                    }
                    let a = cx.identity(a);
                    proposals.push(format!("<{a}! {a}+"));
                }
                PairKey::Sequence(a, b) => {
                    if !cx.is_candidate(a) || !cx.is_candidate(b) {
                        continue;
                    }
                    let (a, b) = (cx.identity(a), cx.identity(b));
                    proposals.push(format!("{a} {b}"));
                    proposals.push(format!("<({a} {b})! ({a} {b})+ {a}"));
                }
            }
            tracing::trace!(?key, count, "pair proposed");
            self.retired.insert(key);
            taken += 1;
        }
        proposals
    }
}
