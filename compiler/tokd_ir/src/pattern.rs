//! Registered patterns.

use crate::describe::quote;
use crate::{PatternId, PatternKind, PatternNode};

/// Either an exact string or a tree; never both, never neither.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PatternBody {
    Literal(String),
    Tree(PatternNode),
}

/// A pattern as produced by the compiler, before the registry assigns it an
/// id and computes its derived properties.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternDef {
    pub name: Option<String>,
    pub kind: PatternKind,
    pub body: PatternBody,
}

impl PatternDef {
    pub fn literal(name: Option<String>, text: impl Into<String>) -> Self {
        PatternDef {
            name,
            kind: PatternKind::Literal,
            body: PatternBody::Literal(text.into()),
        }
    }

    pub fn tree(name: Option<String>, kind: PatternKind, root: PatternNode) -> Self {
        PatternDef {
            name,
            kind,
            body: PatternBody::Tree(root),
        }
    }
}

/// A registered grammar rule.
///
/// Immutable once registered, apart from promotion (rename + kind change)
/// performed through the registry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pattern {
    pub(crate) id: PatternId,
    pub(crate) name: Option<String>,
    pub(crate) kind: PatternKind,
    pub(crate) body: PatternBody,
    pub(crate) penalty: u32,
    pub(crate) shape: String,
}

impl Pattern {
    #[inline]
    pub fn id(&self) -> PatternId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    pub fn body(&self) -> &PatternBody {
        &self.body
    }

    /// Literal text, for literal patterns.
    pub fn literal(&self) -> Option<&str> {
        match &self.body {
            PatternBody::Literal(text) => Some(text),
            PatternBody::Tree(_) => None,
        }
    }

    /// Root node, for tree patterns.
    pub fn root(&self) -> Option<&PatternNode> {
        match &self.body {
            PatternBody::Tree(root) => Some(root),
            PatternBody::Literal(_) => None,
        }
    }

    /// Complexity cost of the tree; literals cost nothing.
    #[inline]
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Full-depth canonical description; equal shapes mean equal behavior.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// Safe external identity: the bare name, a quoted name, or `[id]`.
    pub fn identity(&self) -> String {
        match &self.name {
            Some(name) if is_safe_name(name) => name.clone(),
            Some(name) => quote(name),
            None => self.id.to_string(),
        }
    }

    /// Whether this pattern's tree references `other` anywhere.
    pub fn depends_on(&self, other: PatternId) -> bool {
        self.root().is_some_and(|root| root.depends_on(other))
    }
}

/// Names that can appear bare in pattern text: `[A-Za-z][-_A-Za-z0-9]*`.
pub fn is_safe_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
