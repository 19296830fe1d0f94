//! Promotion of experiments that turn out to be known building blocks.

use tokd_ir::{DescribeMode, PatternId, PatternKind, PatternRegistry};

use crate::{NamedShape, TrainingEvent, TrainingObserver};

/// Give each shape's name to the nameless pattern that behaves like it,
/// promoting that pattern to Derived. Returns the promoted ids.
///
/// Shapes whose name is taken, whose text does not compile yet (it may use
/// a name an earlier shape has not produced), or that nothing matches are
/// skipped.
pub fn name_known_shapes(
    registry: &mut PatternRegistry,
    shapes: &[NamedShape],
    observer: &mut dyn TrainingObserver,
) -> Vec<PatternId> {
    let mut named = Vec::new();
    for shape in shapes {
        if registry.id_of(&shape.name).is_some() {
            continue;
        }
        let root = match tokd_parse::compile(registry, &shape.text, Some(&shape.name)) {
            Ok(root) => root,
            Err(error) => {
                tracing::trace!(name = %shape.name, %error, "shape not compilable yet");
                continue;
            }
        };
        let full = registry.describe_tree(&root, DescribeMode::Full);
        let Some(id) = registry.find_shape(&full) else {
            continue;
        };
        if registry.get(id).is_some_and(|p| p.name().is_some()) {
            continue;
        }
        if let Err(error) = registry.promote(id, &shape.name, PatternKind::Derived) {
            tracing::warn!(name = %shape.name, %error, "could not name pattern");
            continue;
        }
        observer.on_event(&TrainingEvent::Named {
            id,
            name: shape.name.clone(),
        });
        named.push(id);
    }
    named
}

#[cfg(test)]
mod tests;
