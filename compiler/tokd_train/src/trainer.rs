//! The induction loop.

use tokd_chart::Chart;
use tokd_ir::PatternRegistry;
use tokd_parse::RegisterTextError;

use crate::strategy::{strategies_for, ProposalContext, ProposalStrategy};
use crate::{cull, name_known_shapes, Survey, TrainerConfig, TrainingEvent, TrainingObserver};

#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("could not register the initial alphabet: {0}")]
    Alphabet(#[from] RegisterTextError),
}

/// Owns a registry and a corpus and grows the registry from it.
///
/// Each iteration parses every paragraph, surveys the charts, lets each
/// enabled strategy propose experiments, culls the weakest experiments and
/// names the ones that match a known shape.
pub struct Trainer {
    registry: PatternRegistry,
    config: TrainerConfig,
    strategies: Vec<Box<dyn ProposalStrategy>>,
    survey: Survey,
    paragraphs: Vec<String>,
    iteration: usize,
}

impl Trainer {
    /// A trainer over a fresh registry holding the initial alphabet.
    pub fn new(config: TrainerConfig) -> Result<Self, TrainError> {
        let mut registry = PatternRegistry::new();
        crate::init_alphabet(&mut registry)?;
        Ok(Self::with_registry(registry, config))
    }

    /// A trainer continuing from an existing registry.
    pub fn with_registry(registry: PatternRegistry, config: TrainerConfig) -> Self {
        Trainer {
            registry,
            strategies: strategies_for(config.strategies),
            survey: Survey::new(config.example_cap),
            config,
            paragraphs: Vec::new(),
            iteration: 0,
        }
    }

    /// Replace the proposal strategies chosen from the config.
    pub fn set_strategies(&mut self, strategies: Vec<Box<dyn ProposalStrategy>>) {
        self.strategies = strategies;
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PatternRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> PatternRegistry {
        self.registry
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Statistics of the most recent iteration.
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Iterations run so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn add_paragraphs<I>(&mut self, paragraphs: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.paragraphs.extend(paragraphs.into_iter().map(Into::into));
    }

    /// Parse `text` against the current registry.
    pub fn parse(&self, text: &str) -> Chart {
        tokd_chart::parse(&self.registry, text, self.config.match_limits)
    }

    /// Run the configured number of iterations.
    pub fn train(&mut self, observer: &mut dyn TrainingObserver) {
        for _ in 0..self.config.iterations {
            self.iterate(observer);
        }
    }

    /// Run one survey → propose → cull → name round.
    #[tracing::instrument(level = "debug", skip_all, fields(iteration = self.iteration + 1))]
    pub fn iterate(&mut self, observer: &mut dyn TrainingObserver) {
        self.iteration += 1;
        let iteration = self.iteration;
        observer.on_event(&TrainingEvent::IterationStarted { iteration });

        self.survey.clear();
        let charts: Vec<Chart> = self.paragraphs.iter().map(|p| self.parse(p)).collect();
        for chart in &charts {
            self.survey.record(&self.registry, chart);
        }
        observer.on_event(&TrainingEvent::Surveyed {
            charts: self.survey.charts(),
            tokens: self.survey.tokens(),
            pairs: self.survey.pairs().len(),
        });

        let mut proposals = Vec::new();
        let cx = ProposalContext {
            registry: &self.registry,
            survey: &self.survey,
            charts: &charts,
            config: &self.config,
        };
        for strategy in &mut self.strategies {
            let name = strategy.name();
            proposals.extend(strategy.propose(&cx).into_iter().map(|text| (name, text)));
        }

        for (strategy, text) in proposals {
            let event = match tokd_parse::register_experiment(&mut self.registry, &text) {
                Ok(registration) => TrainingEvent::Proposed {
                    strategy,
                    text,
                    id: registration.id(),
                    new: registration.is_new(),
                },
                Err(error) => TrainingEvent::ProposalRejected {
                    strategy,
                    text,
                    reason: error.to_string(),
                },
            };
            observer.on_event(&event);
        }

        if self.config.cull {
            cull(
                &mut self.registry,
                &self.survey,
                self.config.keep_experiments,
                observer,
            );
        }
        name_known_shapes(&mut self.registry, &self.config.shapes, observer);

        observer.on_event(&TrainingEvent::IterationFinished {
            iteration,
            patterns: self.registry.len(),
        });
    }
}
