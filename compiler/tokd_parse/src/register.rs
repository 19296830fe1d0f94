//! Text-level registration with functional-duplicate detection.

use tokd_ir::{DescribeMode, PatternId, PatternKind, PatternRegistry};

use crate::{compile, compile_def, CompileError, RegisterTextError};

/// Outcome of a duplicate-checking registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Registration {
    /// A new pattern was added.
    New(PatternId),
    /// A functionally identical pattern was already registered; nothing was
    /// added.
    Existing(PatternId),
}

impl Registration {
    #[inline]
    pub fn id(self) -> PatternId {
        match self {
            Registration::New(id) | Registration::Existing(id) => id,
        }
    }

    #[inline]
    pub fn is_new(self) -> bool {
        matches!(self, Registration::New(_))
    }
}

/// The registered pattern that behaves exactly like `text`, if any.
pub fn pattern_exists(
    registry: &PatternRegistry,
    text: &str,
) -> Result<Option<PatternId>, CompileError> {
    let root = compile(registry, text, None)?;
    let shape = registry.describe_tree(&root, DescribeMode::Full);
    Ok(registry.find_shape(&shape))
}

/// Compile and register `text`, unless an equivalent pattern exists.
///
/// The existing pattern is returned unchanged: neither its name nor its
/// kind is touched.
pub fn register(
    registry: &mut PatternRegistry,
    name: Option<&str>,
    kind: PatternKind,
    text: &str,
) -> Result<Registration, RegisterTextError> {
    let def = compile_def(registry, name, kind, text)?;
    if let tokd_ir::PatternBody::Tree(root) = &def.body {
        let shape = registry.describe_tree(root, DescribeMode::Full);
        if let Some(existing) = registry.find_shape(&shape) {
            tracing::trace!(%text, existing = existing.raw(), "duplicate pattern");
            return Ok(Registration::Existing(existing));
        }
    }
    let id = registry.register(def)?;
    tracing::debug!(%text, id = id.raw(), kind = %kind, "registered pattern");
    Ok(Registration::New(id))
}

/// Register a nameless experimental pattern proposed by induction.
pub fn register_experiment(
    registry: &mut PatternRegistry,
    text: &str,
) -> Result<Registration, RegisterTextError> {
    register(registry, None, PatternKind::Experimental, text)
}

#[cfg(test)]
mod tests;
