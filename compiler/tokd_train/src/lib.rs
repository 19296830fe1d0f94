//! Grammar induction for tokd.
//!
//! A [`Trainer`] starts from a registry of character literals and letter
//! and digit classes, then repeatedly parses a corpus, surveys which
//! patterns match and which sit next to each other, and registers new
//! experimental patterns proposed from those statistics. Experiments that
//! cover little are culled; ones that behave like a known building block
//! (see [`TrainerConfig::shapes`]) are named and kept.
//!
//! Progress is reported as [`TrainingEvent`]s to a [`TrainingObserver`].

mod alphabet;
mod config;
mod cull;
mod naming;
mod observer;
mod strategy;
mod survey;
mod trainer;

pub use alphabet::init_alphabet;
pub use config::{NamedShape, ParseStrategyError, StrategySet, TrainerConfig};
pub use cull::cull;
pub use naming::name_known_shapes;
pub use observer::{TracingObserver, TrainingEvent, TrainingObserver};
pub use strategy::{
    strategies_for, HoleStrategy, PairStrategy, ProposalContext, ProposalStrategy,
    StretchStrategy,
};
pub use survey::{PairKey, PatternStats, ReportRow, Survey};
pub use trainer::{TrainError, Trainer};
