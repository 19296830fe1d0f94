//! Removal of experiments that did not earn their keep.

use tokd_ir::{PatternId, PatternKind, PatternRegistry};

use crate::{Survey, TrainingEvent, TrainingObserver};

/// Rank surveyed experiments by `coverage - penalty` and remove all but the
/// best `keep`, returning the removed ids.
///
/// Experiments registered after the survey was taken have no measurements
/// yet and are left alone. An experiment that another registered pattern
/// still references is kept and reported as blocked. Candidates are
/// processed from the newest id down, so a ranked-out chain whose top is
/// removed first can be removed in the same pass.
#[tracing::instrument(level = "debug", skip_all, fields(keep = keep))]
pub fn cull(
    registry: &mut PatternRegistry,
    survey: &Survey,
    keep: usize,
    observer: &mut dyn TrainingObserver,
) -> Vec<PatternId> {
    let mut ranked: Vec<(PatternId, i64)> = registry
        .iter()
        .filter(|p| p.kind() == PatternKind::Experimental && survey.covers(p.id()))
        .map(|p| (p.id(), score(survey, p.id(), p.penalty())))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut losers: Vec<(PatternId, i64)> = ranked.into_iter().skip(keep).collect();
    losers.sort_by(|a, b| b.0.cmp(&a.0));

    let mut removed = Vec::new();
    for (id, score) in losers {
        let dependents = registry.dependents(id);
        if !dependents.is_empty() {
            observer.on_event(&TrainingEvent::CullBlocked { id, dependents });
            continue;
        }
        let description = registry.describe(id, tokd_ir::DescribeMode::Shallow);
        if registry.unregister(id).is_some() {
            observer.on_event(&TrainingEvent::Culled {
                id,
                description,
                score,
            });
            removed.push(id);
        }
    }
    tracing::debug!(removed = removed.len(), "cull complete");
    removed
}

fn score(survey: &Survey, id: PatternId, penalty: u32) -> i64 {
    let coverage = survey.stats(id).map_or(0, |s| s.coverage);
    i64::try_from(coverage).unwrap_or(i64::MAX) - i64::from(penalty)
}

#[cfg(test)]
mod tests;
