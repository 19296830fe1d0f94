//! Node metadata: repetition bounds, look-around mode and pattern maturity.

use std::fmt;
use std::str::FromStr;

/// Inclusive repetition bounds of a pattern-tree node.
///
/// `max == None` is unbounded. `{0,0}` is a pure negative assertion: the node
/// succeeds with zero width only when its content does not match.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Quantity {
    pub min: u32,
    pub max: Option<u32>,
}

impl Quantity {
    /// `{1,1}`, the default for every node.
    pub const ONE: Quantity = Quantity {
        min: 1,
        max: Some(1),
    };
    /// `!`
    pub const NONE: Quantity = Quantity {
        min: 0,
        max: Some(0),
    };
    /// `?`
    pub const OPTIONAL: Quantity = Quantity {
        min: 0,
        max: Some(1),
    };
    /// `*`
    pub const ANY: Quantity = Quantity { min: 0, max: None };
    /// `+`
    pub const SOME: Quantity = Quantity { min: 1, max: None };

    /// `{n}`
    pub const fn exactly(n: u32) -> Self {
        Quantity {
            min: n,
            max: Some(n),
        }
    }

    /// `{n+}`
    pub const fn at_least(n: u32) -> Self {
        Quantity { min: n, max: None }
    }

    /// `{min-max}`; `None` when `min > max`.
    pub const fn range(min: u32, max: u32) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Quantity {
                min,
                max: Some(max),
            })
        }
    }

    #[inline]
    pub fn is_one(self) -> bool {
        self == Self::ONE
    }

    /// True for `{0,0}`.
    #[inline]
    pub fn is_negative(self) -> bool {
        self.max == Some(0)
    }

    /// True while another submatch may still be collected.
    #[inline]
    pub fn wants_more(self, count: u32) -> bool {
        self.max.map_or(true, |max| count < max)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

/// Renders the quantifier suffix; `{1,1}` renders as nothing.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (1, Some(1)) => Ok(()),
            (0, Some(0)) => f.write_str("!"),
            (0, Some(1)) => f.write_str("?"),
            (0, None) => f.write_str("*"),
            (1, None) => f.write_str("+"),
            (min, None) => write!(f, "{{{min}+}}"),
            (min, Some(max)) if min == max => write!(f, "{{{min}}}"),
            (min, Some(max)) => write!(f, "{{{min}-{max}}}"),
        }
    }
}

/// Which side of the current position a node inspects.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Look {
    #[default]
    Here,
    /// Zero-width; requires (or with `!` forbids) a match starting here.
    Ahead,
    /// Zero-width; requires (or with `!` forbids) a match ending just before here.
    Behind,
}

impl Look {
    /// Prefix marker in the pattern language.
    pub const fn prefix(self) -> &'static str {
        match self {
            Look::Here => "",
            Look::Ahead => ">",
            Look::Behind => "<",
        }
    }
}

/// Maturity rank of a pattern, from foundational to speculative.
///
/// The derived ordering is the rank: induction only builds on candidates at or
/// above a configured kind, holes are spans not covered by `Derived` or above,
/// and culling only ever touches `Experimental` patterns.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PatternKind {
    Literal,
    Basics,
    Derived,
    Experimental,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Literal,
        PatternKind::Basics,
        PatternKind::Derived,
        PatternKind::Experimental,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PatternKind::Literal => "Literal",
            PatternKind::Basics => "Basics",
            PatternKind::Derived => "Derived",
            PatternKind::Experimental => "Experimental",
        }
    }

    /// `Derived` or `Experimental`: a "real" token for hole detection and
    /// match-tree children.
    #[inline]
    pub fn is_derived_or_above(self) -> bool {
        self >= PatternKind::Derived
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a kind name is not one of the four ranks.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown pattern kind `{0}`")]
pub struct ParseKindError(pub String);

impl FromStr for PatternKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
