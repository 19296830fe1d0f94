//! Pattern compiler for tokd.
//!
//! Turns pattern text into a reduced [`PatternNode`] tree, resolving names
//! and ids against a [`PatternRegistry`], and offers the text-level
//! registration entry points used by the trainer and the table loader.
//!
//! Compilation is lex → parse → reduce; look-behind terms are checked as
//! they are parsed. Nothing is
//! registered until the whole text has compiled, so a failure never leaves
//! a partial pattern behind.

mod cursor;
mod error;
mod parser;
mod register;
mod validate;

pub use error::{CompileError, CompileErrorKind, RegisterTextError};
pub use register::{pattern_exists, register, register_experiment, Registration};

use tokd_ir::{reduce, PatternDef, PatternKind, PatternNode, PatternRegistry};

/// Compile `text` into a reduced tree. `name` only labels errors.
#[tracing::instrument(level = "trace", skip(registry))]
pub fn compile(
    registry: &PatternRegistry,
    text: &str,
    name: Option<&str>,
) -> Result<PatternNode, CompileError> {
    let mut root = parser::Parser::new(text, registry)
        .parse_root()
        .map_err(|e| e.in_pattern(name))?;
    reduce(&mut root);
    Ok(root)
}

/// Compile `text` into a definition ready for registration.
pub fn compile_def(
    registry: &PatternRegistry,
    name: Option<&str>,
    kind: PatternKind,
    text: &str,
) -> Result<PatternDef, CompileError> {
    let root = compile(registry, text, name)?;
    Ok(PatternDef::tree(name.map(str::to_string), kind, root))
}

#[cfg(test)]
mod tests;
