//! Structured training events.
//!
//! The induction loop reports what it does through a [`TrainingObserver`]
//! instead of printing. [`TracingObserver`] forwards every event to
//! `tracing`; a `Vec<TrainingEvent>` records them.

use tokd_ir::PatternId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TrainingEvent {
    IterationStarted {
        iteration: usize,
    },
    Surveyed {
        charts: usize,
        tokens: u64,
        pairs: usize,
    },
    Proposed {
        strategy: &'static str,
        text: String,
        id: PatternId,
        /// False when an equivalent pattern was already registered.
        new: bool,
    },
    ProposalRejected {
        strategy: &'static str,
        text: String,
        reason: String,
    },
    Culled {
        id: PatternId,
        description: String,
        score: i64,
    },
    /// An experiment ranked out but other patterns still reference it.
    CullBlocked {
        id: PatternId,
        dependents: Vec<PatternId>,
    },
    Named {
        id: PatternId,
        name: String,
    },
    IterationFinished {
        iteration: usize,
        patterns: usize,
    },
}

pub trait TrainingObserver {
    fn on_event(&mut self, event: &TrainingEvent);
}

/// Logs each event at a level matching its importance.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingObserver;

impl TrainingObserver for TracingObserver {
    fn on_event(&mut self, event: &TrainingEvent) {
        match event {
            TrainingEvent::IterationStarted { iteration } => {
                tracing::info!(iteration, "iteration started");
            }
            TrainingEvent::Surveyed {
                charts,
                tokens,
                pairs,
            } => tracing::debug!(charts, tokens, pairs, "survey complete"),
            TrainingEvent::Proposed {
                strategy,
                text,
                id,
                new,
            } => tracing::debug!(strategy, %text, id = id.raw(), new, "proposed pattern"),
            TrainingEvent::ProposalRejected {
                strategy,
                text,
                reason,
            } => tracing::warn!(strategy, %text, %reason, "proposal rejected"),
            TrainingEvent::Culled {
                id,
                description,
                score,
            } => tracing::debug!(id = id.raw(), %description, score, "culled experiment"),
            TrainingEvent::CullBlocked { id, dependents } => {
                tracing::trace!(id = id.raw(), dependents = dependents.len(), "cull blocked");
            }
            TrainingEvent::Named { id, name } => {
                tracing::info!(id = id.raw(), %name, "named pattern");
            }
            TrainingEvent::IterationFinished {
                iteration,
                patterns,
            } => tracing::info!(iteration, patterns, "iteration finished"),
        }
    }
}

impl TrainingObserver for Vec<TrainingEvent> {
    fn on_event(&mut self, event: &TrainingEvent) {
        self.push(event.clone());
    }
}
