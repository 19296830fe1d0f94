//! Compile error types.
//!
//! A [`CompileError`] says WHERE (byte span into the pattern text), WHAT
//! ([`CompileErrorKind`]) and, when known, which named pattern was being
//! compiled.

use tokd_ir::{RegisterError, Span};

/// What went wrong while compiling pattern text.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum CompileErrorKind {
    #[error("unrecognized character")]
    InvalidCharacter,
    #[error("unknown pattern name '{0}'")]
    UnknownName(String),
    #[error("unknown pattern id [{0}]")]
    UnknownId(u64),
    #[error("quantifier has nothing to repeat")]
    QuantifierWithoutAtom,
    #[error("quantifier cannot follow a look-around marker")]
    QuantifierAfterLook,
    #[error("look-around marker follows another look-around marker")]
    DoubleLook,
    #[error("look-around marker has nothing to look for")]
    LookWithoutAtom,
    #[error("range minimum {min} exceeds maximum {max}")]
    InvalidRange { min: u64, max: u64 },
    #[error("')' without matching '('")]
    UnexpectedCloseParen,
    #[error("'(' is never closed")]
    UnclosedParen,
    #[error("empty alternative")]
    EmptyAlternative,
    #[error("empty pattern")]
    EmptyPattern,
    #[error("look-behind may only contain single, unquantified matches")]
    QuantifierInLookBehind,
    #[error("look-behind may not contain nested look-around")]
    LookAroundInLookBehind,
    #[error("number {0} is too large")]
    NumberTooLarge(u64),
}

/// A compile failure with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}{}", in_pattern(.pattern.as_deref()))]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub span: Span,
    /// Name of the pattern being compiled, if it has one.
    pub pattern: Option<String>,
}

fn in_pattern(name: Option<&str>) -> String {
    name.map(|n| format!(" in pattern '{n}'")).unwrap_or_default()
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, span: Span) -> Self {
        CompileError {
            kind,
            span,
            pattern: None,
        }
    }

    #[must_use]
    pub fn in_pattern(mut self, name: Option<&str>) -> Self {
        self.pattern = name.map(str::to_string);
        self
    }
}

/// Failure of a text-level registration: either the text did not compile or
/// the registry refused the result.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegisterTextError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Register(#[from] RegisterError),
}
