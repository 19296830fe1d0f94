//! Training text ingestion.

use std::path::Path;

use tokd_ir::PatternRegistry;

/// Characters shown on each side of a rejected character.
const CONTEXT: usize = 20;

/// A paragraph holding a character the registry has no literal for.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("disallowed character {ch:?} in paragraph {paragraph}: \"{context}\"")]
pub struct CorpusError {
    /// 1-based paragraph number in the source text.
    pub paragraph: usize,
    pub ch: char,
    /// Character offset within the cleaned paragraph.
    pub position: usize,
    pub context: String,
}

/// Cleaned paragraphs ready for training, and the ones that were rejected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Corpus {
    pub paragraphs: Vec<String>,
    pub rejected: Vec<CorpusError>,
}

/// Split raw text into cleaned paragraphs, numbered from 1.
///
/// Paragraphs are separated by blank lines. Within one, lines are joined
/// with spaces, tabs become spaces, em and en dashes become `--` and `-`,
/// runs of spaces collapse to one and the ends are trimmed. Paragraphs that
/// end up empty are dropped but keep their number.
pub fn split_paragraphs(text: &str) -> Vec<(usize, String)> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut raw: Vec<Vec<&str>> = vec![Vec::new()];
    for line in text.split('\n') {
        if line.trim().is_empty() {
            if raw.last().is_some_and(|p| !p.is_empty()) {
                raw.push(Vec::new());
            }
        } else if let Some(paragraph) = raw.last_mut() {
            paragraph.push(line);
        }
    }

    raw.into_iter()
        .filter(|lines| !lines.is_empty())
        .enumerate()
        .map(|(i, lines)| (i + 1, clean(&lines.join(" "))))
        .filter(|(_, paragraph)| !paragraph.is_empty())
        .collect()
}

fn clean(paragraph: &str) -> String {
    let paragraph = paragraph
        .replace('\t', " ")
        .replace('\u{2014}', "--")
        .replace('\u{2013}', "-");
    paragraph.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Split `text` into paragraphs and keep those whose every character is in
/// the registry's literal alphabet.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn ingest(registry: &PatternRegistry, text: &str) -> Corpus {
    let mut corpus = Corpus::default();
    for (number, paragraph) in split_paragraphs(text) {
        match validate(registry, number, &paragraph) {
            Ok(()) => corpus.paragraphs.push(paragraph),
            Err(error) => {
                tracing::warn!(%error, "paragraph rejected");
                corpus.rejected.push(error);
            }
        }
    }
    tracing::debug!(
        paragraphs = corpus.paragraphs.len(),
        rejected = corpus.rejected.len(),
        "corpus ingested"
    );
    corpus
}

/// [`ingest`] a file.
pub fn read_corpus(registry: &PatternRegistry, path: &Path) -> std::io::Result<Corpus> {
    let text = std::fs::read_to_string(path)?;
    Ok(ingest(registry, &text))
}

fn validate(registry: &PatternRegistry, number: usize, paragraph: &str) -> Result<(), CorpusError> {
    let chars: Vec<char> = paragraph.chars().collect();
    let Some(position) = chars.iter().position(|ch| !registry.allows_char(*ch)) else {
        return Ok(());
    };
    let start = position.saturating_sub(CONTEXT);
    let end = (position + CONTEXT + 1).min(chars.len());
    Err(CorpusError {
        paragraph: number,
        ch: chars[position],
        position,
        context: chars[start..end].iter().collect(),
    })
}
