#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use tokd_ir::{DescribeMode, PatternKind, PatternRegistry};
use tokd_parse::compile;
use tokd_train::{
    ProposalContext, ProposalStrategy, StrategySet, Trainer, TrainerConfig, TrainingEvent,
};

const CORPUS: [&str; 4] = [
    "the cat sat on the mat",
    "a dog ran to the park",
    "the sun is warm today",
    "we like to read good books",
];

fn trainer(config: TrainerConfig) -> Trainer {
    let mut trainer = Trainer::new(config).unwrap();
    trainer.add_paragraphs(CORPUS);
    trainer
}

fn snapshot(registry: &PatternRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|p| {
            format!(
                "{} {} {} {}",
                p.id(),
                p.identity(),
                p.kind(),
                registry.describe(p.id(), DescribeMode::Ids)
            )
        })
        .collect()
}

#[test]
fn first_iteration_discovers_words() {
    let mut trainer = trainer(TrainerConfig::default());
    let mut events: Vec<TrainingEvent> = Vec::new();
    trainer.train(&mut events);

    let word = trainer.registry().get_by_name("Word").unwrap();
    assert_eq!(word.kind(), PatternKind::Derived);
    assert_eq!(
        trainer.registry().describe(word.id(), DescribeMode::Shallow),
        "<Letter! Letter+"
    );

    assert_eq!(events.first(), Some(&TrainingEvent::IterationStarted { iteration: 1 }));
    assert!(events.contains(&TrainingEvent::Named {
        id: word.id(),
        name: "Word".to_string(),
    }));
    assert!(matches!(
        events.last(),
        Some(TrainingEvent::IterationFinished { iteration: 1, .. })
    ));
    assert_eq!(trainer.survey().charts(), CORPUS.len());
}

#[test]
fn named_words_cover_the_text() {
    let mut trainer = trainer(TrainerConfig::default());
    trainer.train(&mut Vec::new());

    let word = trainer.registry().id_of("Word").unwrap();
    let chart = trainer.parse("the cat");
    let texts: Vec<&str> = (0..chart.len())
        .filter_map(|pos| chart.lookup_head(pos, word))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(texts, vec!["the", "cat"]);
}

#[test]
fn training_is_deterministic() {
    let mut config = TrainerConfig::default();
    config.iterations = 2;
    config.strategies = StrategySet::ALL;

    let mut first = trainer(config.clone());
    first.train(&mut Vec::new());
    let mut second = trainer(config);
    second.train(&mut Vec::new());

    assert_eq!(snapshot(first.registry()), snapshot(second.registry()));
}

#[test]
fn later_iterations_cull_experiments() {
    let mut config = TrainerConfig::default();
    config.iterations = 2;
    config.keep_experiments = 5;
    let mut trainer = trainer(config);
    let mut events: Vec<TrainingEvent> = Vec::new();
    trainer.train(&mut events);

    assert!(events
        .iter()
        .any(|e| matches!(e, TrainingEvent::Culled { .. })));
    assert!(trainer.registry().id_of("Word").is_some());
}

#[test]
fn disabled_cull_keeps_everything() {
    let mut config = TrainerConfig::default();
    config.iterations = 2;
    config.cull = false;
    let mut trainer = trainer(config);
    let mut events: Vec<TrainingEvent> = Vec::new();
    trainer.train(&mut events);

    assert!(!events
        .iter()
        .any(|e| matches!(e, TrainingEvent::Culled { .. } | TrainingEvent::CullBlocked { .. })));
}

#[test]
fn trained_patterns_describe_as_valid_pattern_text() {
    let mut config = TrainerConfig::default();
    config.iterations = 4;
    config.strategies = StrategySet::ALL;
    let mut trainer = trainer(config);
    trainer.train(&mut Vec::new());

    let registry = trainer.registry();
    for pattern in registry.iter().filter(|p| p.root().is_some()) {
        let shallow = registry.describe(pattern.id(), DescribeMode::Shallow);
        let root = compile(registry, &shallow, None)
            .unwrap_or_else(|e| panic!("{} {shallow:?}: {e}", pattern.id()));
        assert_eq!(
            registry.describe_tree(&root, DescribeMode::Full),
            registry.describe(pattern.id(), DescribeMode::Full),
            "{shallow:?}"
        );
    }
}

struct Fixed(Vec<&'static str>);

impl ProposalStrategy for Fixed {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn propose(&mut self, _cx: &ProposalContext<'_>) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

#[test]
fn proposals_are_registered_or_rejected() {
    let mut trainer = trainer(TrainerConfig::default());
    trainer.set_strategies(vec![Box::new(Fixed(vec!["t h e", "t h e", "Tt (("]))]);
    let before = trainer.registry().len();
    let mut events: Vec<TrainingEvent> = Vec::new();
    trainer.iterate(&mut events);

    let proposed: Vec<(String, bool)> = events
        .iter()
        .filter_map(|e| match e {
            TrainingEvent::Proposed { text, new, .. } => Some((text.clone(), *new)),
            _ => None,
        })
        .collect();
    assert_eq!(
        proposed,
        vec![("t h e".to_string(), true), ("t h e".to_string(), false)]
    );
    assert!(events.iter().any(|e| matches!(
        e,
        TrainingEvent::ProposalRejected { strategy: "fixed", text, .. } if text == "Tt (("
    )));
    assert_eq!(trainer.registry().len(), before + 1);
    assert_eq!(trainer.iteration(), 1);
}
