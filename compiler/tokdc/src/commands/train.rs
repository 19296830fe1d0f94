//! The `train` command.

use std::fmt::Write as _;
use std::path::Path;

use tokd_ir::PatternRegistry;
use tokd_train::{Survey, TracingObserver, Trainer};

use super::{read_file, TrainOptions};

/// Learn patterns from the corpus at `path`, print the survey report and
/// optionally save the table.
pub fn train_corpus(path: &str, options: &TrainOptions) {
    let text = read_file(path);

    let mut trainer = match Trainer::new(options.config.clone()) {
        Ok(trainer) => trainer,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let corpus = tokd_io::ingest(trainer.registry(), &text);
    tracing::debug!(
        path,
        paragraphs = corpus.paragraphs.len(),
        rejected = corpus.rejected.len(),
        "corpus ingested"
    );
    for rejected in &corpus.rejected {
        eprintln!("warning: skipped {rejected}");
    }
    if corpus.paragraphs.is_empty() {
        eprintln!("error: '{path}' has no usable paragraphs");
        std::process::exit(1);
    }
    println!(
        "Training on {} paragraphs ({} iterations, strategies: {})",
        corpus.paragraphs.len(),
        options.config.iterations,
        options.config.strategies
    );

    trainer.add_paragraphs(corpus.paragraphs);
    trainer.train(&mut TracingObserver);

    print!("{}", render_report(trainer.registry(), trainer.survey(), options.report));

    if let Some(save) = &options.save {
        save_or_exit(trainer.registry(), save);
    }
}

fn save_or_exit(registry: &PatternRegistry, path: &Path) {
    if let Err(e) = tokd_io::save_table(registry, path) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    println!("Saved {} patterns to {}", registry.len(), path.display());
}

/// Registry size followed by the best `limit` survey rows.
pub fn render_report(registry: &PatternRegistry, survey: &Survey, limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} patterns", registry.len());
    for row in survey.report(registry, limit) {
        let _ = writeln!(out, "{row}");
    }
    out
}
