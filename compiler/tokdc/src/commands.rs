//! Command handlers for the tokd CLI.
//!
//! Each handler prints its result and exits the process with status 1 on
//! failure. The `render_*` functions build the printed text and are what
//! the tests exercise.

mod inspect;
mod options;
mod train;

pub use inspect::{
    describe_pattern, list_patterns, parse_text, render_description, render_parse,
};
pub use options::{parse_parse_options, parse_train_options, ParseOptions, TrainOptions};
pub use train::{render_report, train_corpus};

use tokd_ir::PatternRegistry;

/// Read a file, or exit with a readable message.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Load a pattern table, or exit with the failing line.
pub(crate) fn load_registry(path: &str) -> PatternRegistry {
    match tokd_io::read_table(&read_file(path)) {
        Ok(registry) => {
            tracing::debug!(path, patterns = registry.len(), "loaded pattern table");
            registry
        }
        Err(e) => {
            eprintln!("error: '{path}': {e}");
            std::process::exit(1);
        }
    }
}
