//! Everything tokd reads from or writes to the outside world.
//!
//! - [`corpus`]: raw training text → cleaned, validated paragraphs
//! - [`table`]: the `Id | Name | Type | Pattern` pattern table file
//! - [`export`]: match trees as JSON

pub mod corpus;
pub mod export;
pub mod table;

pub use corpus::{ingest, read_corpus, split_paragraphs, Corpus, CorpusError};
pub use export::{export_chart, to_json, TokenTree};
pub use table::{load_table, read_table, save_table, table_text, write_table, TableError};
