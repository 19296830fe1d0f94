//! Hand-rolled flag parsing for `train` and `parse`.

use std::path::PathBuf;

use tokd_ir::PatternKind;
use tokd_train::TrainerConfig;

#[derive(Clone, Debug)]
pub struct TrainOptions {
    pub config: TrainerConfig,
    pub save: Option<PathBuf>,
    /// Survey report rows printed after training.
    pub report: usize,
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions {
            config: TrainerConfig::default(),
            save: None,
            report: 20,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    pub json: bool,
    pub min_kind: PatternKind,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            json: false,
            min_kind: PatternKind::Derived,
        }
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: &str, current: T) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("warning: {flag} expects a number, got '{value}'; ignored");
        current
    })
}

fn kind(value: &str, current: PatternKind) -> PatternKind {
    value.parse().unwrap_or_else(|e| {
        eprintln!("warning: {e}; using {current}");
        current
    })
}

/// Options for `train`. Unknown flags and bad values are warned about and
/// ignored; arguments not starting with `--` are skipped.
pub fn parse_train_options(args: &[String]) -> TrainOptions {
    let mut options = TrainOptions::default();
    let config = &mut options.config;

    for arg in args {
        if let Some(n) = arg.strip_prefix("--iterations=") {
            config.iterations = number("--iterations", n, config.iterations);
        } else if let Some(list) = arg.strip_prefix("--strategy=") {
            match list.parse() {
                Ok(strategies) => config.strategies = strategies,
                Err(e) => eprintln!("warning: {e}; using {}", config.strategies),
            }
        } else if let Some(n) = arg.strip_prefix("--keep=") {
            config.keep_experiments = number("--keep", n, config.keep_experiments);
        } else if let Some(n) = arg.strip_prefix("--threshold=") {
            config.pair_threshold = number("--threshold", n, config.pair_threshold);
        } else if let Some(k) = arg.strip_prefix("--min-kind=") {
            config.min_candidate_kind = kind(k, config.min_candidate_kind);
        } else if arg == "--no-cull" {
            config.cull = false;
        } else if let Some(n) = arg.strip_prefix("--report=") {
            options.report = number("--report", n, options.report);
        } else if let Some(path) = arg.strip_prefix("--save=") {
            options.save = Some(PathBuf::from(path));
        } else if arg.starts_with("--") {
            eprintln!("warning: unknown option '{arg}'");
        }
    }
    options
}

/// Options for `parse`.
pub fn parse_parse_options(args: &[String]) -> ParseOptions {
    let mut options = ParseOptions::default();
    for arg in args {
        if arg == "--json" {
            options.json = true;
        } else if let Some(k) = arg.strip_prefix("--min-kind=") {
            options.min_kind = kind(k, options.min_kind);
        } else if arg.starts_with("--") {
            eprintln!("warning: unknown option '{arg}'");
        }
    }
    options
}
