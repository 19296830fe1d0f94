//! The pattern table file.
//!
//! ```text
//! Id | Name | Type | Pattern
//! 0 | Space | Literal | ' '
//! 95 | Aa | Basics | A | a
//! 130 |  | Experimental | <[129]! [129]+
//! ```
//!
//! One line per pattern in id order. Names are written as identities (quoted
//! when not bare-safe) and left empty for nameless patterns. Literals store
//! their quoted text; trees store their description with nameless references
//! kept as `[id]`, so loading rebuilds the same trees under the same ids.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use tokd_ir::{
    quote, DescribeMode, ParseKindError, PatternBody, PatternDef, PatternId, PatternKind,
    PatternRegistry, RegisterError,
};
use tokd_parse::CompileError;

const HEADER: &str = "Id | Name | Type | Pattern";
const SEPARATOR: &str = " | ";

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("pattern table I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `Id | Name | Type | Pattern`")]
    Malformed { line: usize },
    #[error("line {line}: bad pattern id `{text}`")]
    BadId { line: usize, text: String },
    #[error("line {line}: {source}")]
    Kind {
        line: usize,
        #[source]
        source: ParseKindError,
    },
    #[error("line {line}: {source}")]
    Compile {
        line: usize,
        #[source]
        source: CompileError,
    },
    #[error("line {line}: {source}")]
    Register {
        line: usize,
        #[source]
        source: RegisterError,
    },
}

/// Render the whole registry as table text, one line per pattern.
pub fn table_text(registry: &PatternRegistry) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for pattern in registry.iter() {
        let name = if pattern.name().is_some() {
            pattern.identity()
        } else {
            String::new()
        };
        let body = match pattern.body() {
            PatternBody::Literal(text) => quote(text),
            PatternBody::Tree(root) => registry.describe_tree(root, DescribeMode::Ids),
        };
        let _ = writeln!(out, "{} | {name} | {} | {body}", pattern.id().raw(), pattern.kind());
    }
    out
}

pub fn write_table(registry: &PatternRegistry, writer: &mut impl Write) -> std::io::Result<()> {
    writer.write_all(table_text(registry).as_bytes())
}

/// Write the registry to `path`, replacing any existing file.
#[tracing::instrument(level = "debug", skip(registry), fields(patterns = registry.len()))]
pub fn save_table(registry: &PatternRegistry, path: &Path) -> Result<(), TableError> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_table(registry, &mut file)?;
    file.flush()?;
    Ok(())
}

/// Rebuild a registry from table text.
pub fn read_table(text: &str) -> Result<PatternRegistry, TableError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));
    match lines.next() {
        Some((_, header)) if header.trim_end() == HEADER => {}
        _ => return Err(TableError::Malformed { line: 1 }),
    }

    let mut registry = PatternRegistry::new();
    for (line, content) in lines {
        if content.trim().is_empty() {
            continue;
        }
        read_line(&mut registry, line, content)?;
    }
    Ok(registry)
}

fn read_line(registry: &mut PatternRegistry, line: usize, content: &str) -> Result<(), TableError> {
    let parts: Vec<&str> = content.splitn(4, SEPARATOR).collect();
    let [id, name, kind, body] = parts.as_slice() else {
        return Err(TableError::Malformed { line });
    };

    let id = id
        .trim()
        .parse::<u32>()
        .map(PatternId::new)
        .map_err(|_| TableError::BadId {
            line,
            text: (*id).to_string(),
        })?;
    let name = (!name.is_empty()).then(|| unquote(name));
    let kind: PatternKind = kind.parse().map_err(|source| TableError::Kind { line, source })?;

    let def = if kind == PatternKind::Literal {
        PatternDef::literal(name, unquote(body))
    } else {
        tokd_parse::compile_def(registry, name.as_deref(), kind, body)
            .map_err(|source| TableError::Compile { line, source })?
    };
    registry
        .register_with_id(id, def)
        .map_err(|source| TableError::Register { line, source })?;
    Ok(())
}

/// Load a registry from the table file at `path`.
#[tracing::instrument(level = "debug")]
pub fn load_table(path: &Path) -> Result<PatternRegistry, TableError> {
    let text = std::fs::read_to_string(path)?;
    let registry = read_table(&text)?;
    tracing::debug!(patterns = registry.len(), "pattern table loaded");
    Ok(registry)
}

/// Undo [`quote`]; text that is not quoted is returned as is.
fn unquote(text: &str) -> String {
    match text
        .strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
    {
        Some(inner) => inner.replace("''", "'"),
        None => text.to_string(),
    }
}
