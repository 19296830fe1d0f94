//! Match trees as JSON.

use serde::{Deserialize, Serialize};
use tokd_chart::{Chart, Token};
use tokd_ir::{PatternKind, PatternRegistry};

/// One token and, when any of them is Derived or above, its sub-tokens.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TokenTree {
    /// Identity of a named pattern, description of a nameless one.
    pub pattern: String,
    pub start: usize,
    pub length: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TokenTree>>,
}

impl TokenTree {
    pub fn new(registry: &PatternRegistry, chart: &Chart, token: &Token) -> Self {
        let derived = |t: &Token| {
            registry
                .get(t.pattern)
                .is_some_and(|p| p.kind().is_derived_or_above())
        };
        let children: Vec<&Token> = token.children.iter().map(|id| chart.token(*id)).collect();
        let children = children.iter().any(|t| derived(*t)).then(|| {
            children
                .iter()
                .map(|child| TokenTree::new(registry, chart, child))
                .collect()
        });
        TokenTree {
            pattern: registry.label(token.pattern),
            start: token.start,
            length: token.len,
            text: token.text.clone(),
            children,
        }
    }
}

/// Trees for every token of kind `min_kind` or above, by start position
/// and then pattern id.
pub fn export_chart(registry: &PatternRegistry, chart: &Chart, min_kind: PatternKind) -> Vec<TokenTree> {
    (0..chart.len())
        .flat_map(|pos| chart.heads_at(pos))
        .filter(|token| registry.get(token.pattern).is_some_and(|p| p.kind() >= min_kind))
        .map(|token| TokenTree::new(registry, chart, token))
        .collect()
}

pub fn to_json(trees: &[TokenTree]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(trees)
}
