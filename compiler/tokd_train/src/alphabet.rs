//! The starting registry: printable ASCII literals and letter/digit classes.

use tokd_ir::{quote, PatternKind, PatternRegistry};
use tokd_parse::RegisterTextError;

/// Literal name for `ch`: the character itself, except for characters that
/// read badly as names.
fn literal_name(ch: char) -> String {
    match ch {
        ' ' => "Space".to_string(),
        '|' => "Pipe".to_string(),
        '\'' => "Apostrophe".to_string(),
        _ => ch.to_string(),
    }
}

fn either(chars: impl Iterator<Item = char>) -> String {
    chars
        .map(|ch| quote(&literal_name(ch)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Register the literals for `' '..='~'` and the Basics classes
/// `Aa`..`Zz`, `Uppercase`, `Lowercase`, `Letter` and `Digit`.
pub fn init_alphabet(registry: &mut PatternRegistry) -> Result<(), RegisterTextError> {
    for ch in ' '..='~' {
        registry.register_literal(Some(&literal_name(ch)), &ch.to_string())?;
    }
    for upper in 'A'..='Z' {
        let lower = upper.to_ascii_lowercase();
        tokd_parse::register(
            registry,
            Some(&format!("{upper}{lower}")),
            PatternKind::Basics,
            &format!("{upper} | {lower}"),
        )?;
    }
    let classes = [
        ("Uppercase", either('A'..='Z')),
        ("Lowercase", either('a'..='z')),
        ("Letter", "Uppercase | Lowercase".to_string()),
        ("Digit", either('0'..='9')),
    ];
    for (name, text) in classes {
        tokd_parse::register(registry, Some(name), PatternKind::Basics, &text)?;
    }
    tracing::debug!(patterns = registry.len(), "alphabet ready");
    Ok(())
}
