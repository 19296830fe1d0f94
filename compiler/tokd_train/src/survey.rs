//! Match statistics collected from parsed charts.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tokd_chart::Chart;
use tokd_ir::{PatternId, PatternKind, PatternRegistry};

/// Per-pattern statistics for one iteration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PatternStats {
    pub matches: u64,
    /// Distinct characters covered, summed over charts.
    pub coverage: u64,
    pub longest: usize,
    /// Characters covered by tokens starting at the first position of a
    /// chart, summed over charts.
    pub stretch: u64,
    /// Distinct matched texts, in order of first sighting.
    pub examples: Vec<String>,
}

/// Two tokens where the second starts exactly where the first ends.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PairKey {
    /// The same pattern twice in a row.
    Repeat(PatternId),
    /// Two different patterns in a row.
    Sequence(PatternId, PatternId),
}

impl PairKey {
    pub fn new(first: PatternId, second: PatternId) -> Self {
        if first == second {
            PairKey::Repeat(first)
        } else {
            PairKey::Sequence(first, second)
        }
    }

    pub fn involves(self, id: PatternId) -> bool {
        match self {
            PairKey::Repeat(a) => a == id,
            PairKey::Sequence(a, b) => a == id || b == id,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Survey {
    stats: FxHashMap<PatternId, PatternStats>,
    pairs: FxHashMap<PairKey, u64>,
    example_cap: usize,
    charts: usize,
    tokens: u64,
    /// Patterns with an id below this existed when the survey was taken.
    horizon: PatternId,
}

impl Survey {
    pub fn new(example_cap: usize) -> Self {
        Survey {
            example_cap,
            ..Survey::default()
        }
    }

    /// Forget everything, keeping the example cap.
    pub fn clear(&mut self) {
        *self = Survey::new(self.example_cap);
    }

    pub fn stats(&self, id: PatternId) -> Option<&PatternStats> {
        self.stats.get(&id)
    }

    pub fn pair_count(&self, key: PairKey) -> u64 {
        self.pairs.get(&key).copied().unwrap_or(0)
    }

    /// All pair counts, highest first; ties in key order.
    pub fn pairs(&self) -> Vec<(PairKey, u64)> {
        let mut pairs: Vec<(PairKey, u64)> = self.pairs.iter().map(|(k, n)| (*k, *n)).collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs
    }

    pub fn charts(&self) -> usize {
        self.charts
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    /// Whether `id` was registered when the survey was taken.
    pub fn covers(&self, id: PatternId) -> bool {
        id < self.horizon
    }

    /// Fold one parsed chart into the statistics.
    pub fn record(&mut self, registry: &PatternRegistry, chart: &Chart) {
        self.horizon = self.horizon.max(registry.next_id());
        self.charts += 1;

        let mut covered: FxHashMap<PatternId, FxHashSet<usize>> = FxHashMap::default();
        for pos in 0..chart.len() {
            for token in chart.heads_at(pos) {
                self.tokens += 1;
                let stats = self.stats.entry(token.pattern).or_default();
                stats.matches += 1;
                stats.longest = stats.longest.max(token.len);
                if pos == 0 {
                    stats.stretch += token.len as u64;
                }
                if stats.examples.len() < self.example_cap
                    && !stats.examples.iter().any(|e| *e == token.text)
                {
                    stats.examples.push(token.text.clone());
                }
                covered
                    .entry(token.pattern)
                    .or_default()
                    .extend(token.start..token.end());

                for next in chart.heads_at(token.end()) {
                    *self.pairs.entry(PairKey::new(token.pattern, next.pattern)).or_default() += 1;
                }
            }
        }
        for (id, positions) in covered {
            if let Some(stats) = self.stats.get_mut(&id) {
                stats.coverage += positions.len() as u64;
            }
        }
    }

    /// Basics-and-above patterns that matched, best coverage first.
    pub fn report(&self, registry: &PatternRegistry, limit: usize) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .stats
            .iter()
            .filter(|(_, stats)| stats.matches > 0)
            .filter_map(|(id, stats)| {
                let pattern = registry.get(*id)?;
                if pattern.kind() < PatternKind::Basics {
                    return None;
                }
                let mut examples = stats.examples.clone();
                examples.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
                examples.truncate(3);
                Some(ReportRow {
                    id: *id,
                    label: registry.label(*id),
                    kind: pattern.kind(),
                    coverage: stats.coverage,
                    matches: stats.matches,
                    stretch: stats.stretch,
                    examples,
                })
            })
            .collect();
        rows.sort_by(|a, b| b.coverage.cmp(&a.coverage).then(a.id.cmp(&b.id)));
        rows.truncate(limit);
        rows
    }
}

/// One line of the survey report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportRow {
    pub id: PatternId,
    pub label: String,
    pub kind: PatternKind,
    pub coverage: u64,
    pub matches: u64,
    pub stretch: u64,
    /// Up to three examples, longest first.
    pub examples: Vec<String>,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} - {} - {} ({} matches)",
            self.coverage, self.id, self.label, self.matches
        )?;
        for example in &self.examples {
            write!(f, "\n  | {}", tokd_ir::quote(example))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
