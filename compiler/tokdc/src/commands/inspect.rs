//! Read-only commands over a saved pattern table: `parse`, `describe` and
//! `patterns`.

use std::fmt::Write as _;

use tokd_chart::{Chart, MatchLimits};
use tokd_ir::{DescribeMode, PatternRegistry};
use tokd_parse::CompileError;

use super::{load_registry, ParseOptions};

/// Match the table at `table` against `text` and print the tokens.
pub fn parse_text(table: &str, text: &str, options: &ParseOptions) {
    let registry = load_registry(table);
    let chart = tokd_chart::parse(&registry, text, MatchLimits::default());
    match render_parse(&registry, &chart, options) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// The chart as JSON match trees or as a position-by-position dump, then
/// the patterns spanning the whole text.
pub fn render_parse(
    registry: &PatternRegistry,
    chart: &Chart,
    options: &ParseOptions,
) -> serde_json::Result<String> {
    if options.json {
        let trees = tokd_io::export_chart(registry, chart, options.min_kind);
        return tokd_io::to_json(&trees);
    }
    let mut out = chart.dump(registry, options.min_kind);
    let top: Vec<String> = chart
        .top_tokens()
        .into_iter()
        .filter(|t| registry.get(t.pattern).is_some_and(|p| p.kind() >= options.min_kind))
        .map(|t| registry.label(t.pattern))
        .collect();
    if !top.is_empty() {
        let _ = write!(out, "\nWhole text: {}", top.join(", "));
    }
    Ok(out)
}

/// Compile `pattern` against the table and print its descriptions.
pub fn describe_pattern(table: &str, pattern: &str) {
    let registry = load_registry(table);
    match render_description(&registry, pattern) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn render_description(registry: &PatternRegistry, pattern: &str) -> Result<String, CompileError> {
    let root = tokd_parse::compile(registry, pattern, None)?;
    let full = registry.describe_tree(&root, DescribeMode::Full);

    let mut out = String::new();
    let _ = writeln!(out, "shallow: {}", registry.describe_tree(&root, DescribeMode::Shallow));
    let _ = writeln!(out, "full:    {full}");
    let _ = writeln!(out, "penalty: {}", registry.node_penalty(&root));
    if let Some(id) = registry.find_shape(&full) {
        let _ = writeln!(out, "same as: {id} {}", registry.label(id));
    }
    Ok(out)
}

/// Print the table's patterns in table format.
pub fn list_patterns(table: &str) {
    let registry = load_registry(table);
    print!("{}", tokd_io::table_text(&registry));
}
