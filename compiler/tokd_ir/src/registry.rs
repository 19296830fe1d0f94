//! Pattern registry: the arena that owns every pattern.
//!
//! Patterns are addressed by [`PatternId`]; the registry keeps three indices
//! alongside the arena:
//! - name → id, so names stay unique at any instant
//! - shape (full-depth description) → ids, for functional-duplicate detection
//! - single character → literal id, the alphabet the corpus is validated against
//!
//! Ids come from a counter owned by the registry. They are never reused, even
//! after removal, so a fresh registry always numbers patterns the same way.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{DescribeMode, Look, NodeKind, Pattern, PatternBody, PatternDef, PatternId, PatternNode};

/// Error when a pattern cannot be registered or updated.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegisterError {
    #[error("already a pattern named '{0}'")]
    DuplicateName(String),
    #[error("pattern id {0} is already registered")]
    DuplicateId(PatternId),
    #[error("no pattern with id {0}")]
    UnknownPattern(PatternId),
    #[error("literal patterns need non-empty text")]
    EmptyLiteral,
}

/// Owner of all registered patterns.
#[derive(Clone, Debug, Default)]
pub struct PatternRegistry {
    /// Indexed by `PatternId`; `None` marks removed or never-used ids.
    slots: Vec<Option<Pattern>>,
    by_name: FxHashMap<String, PatternId>,
    /// Shape → ids in registration order. More than one id per shape only
    /// happens for patterns registered without the duplicate check.
    by_shape: FxHashMap<String, SmallVec<[PatternId; 2]>>,
    literals: FxHashMap<char, PatternId>,
    next_id: u32,
    len: usize,
}

impl PatternRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Id the next registration will receive.
    pub fn next_id(&self) -> PatternId {
        PatternId::new(self.next_id)
    }

    pub fn get(&self, id: PatternId) -> Option<&Pattern> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: PatternId) -> bool {
        self.get(id).is_some()
    }

    pub fn id_of(&self, name: &str) -> Option<PatternId> {
        self.by_name.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Pattern> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// All patterns in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Pattern> + '_ {
        self.slots.iter().flatten()
    }

    pub fn ids(&self) -> Vec<PatternId> {
        self.iter().map(Pattern::id).collect()
    }

    /// The single-character literal pattern for `ch`.
    pub fn literal_for(&self, ch: char) -> Option<PatternId> {
        self.literals.get(&ch).copied()
    }

    /// Whether `ch` is in the registered literal alphabet.
    pub fn allows_char(&self, ch: char) -> bool {
        self.literals.contains_key(&ch)
    }

    /// Lowest id registered with this full-depth description.
    pub fn find_shape(&self, shape: &str) -> Option<PatternId> {
        self.by_shape
            .get(shape)
            .and_then(|ids| ids.iter().min().copied())
    }

    /// Register under the next free id.
    pub fn register(&mut self, def: PatternDef) -> Result<PatternId, RegisterError> {
        self.insert(PatternId::new(self.next_id), def)
    }

    /// Register under an explicit id (used when loading a saved table).
    pub fn register_with_id(
        &mut self,
        id: PatternId,
        def: PatternDef,
    ) -> Result<PatternId, RegisterError> {
        if self.contains(id) {
            return Err(RegisterError::DuplicateId(id));
        }
        self.insert(id, def)
    }

    /// Register a literal pattern.
    pub fn register_literal(
        &mut self,
        name: Option<&str>,
        text: &str,
    ) -> Result<PatternId, RegisterError> {
        self.register(PatternDef::literal(name.map(str::to_string), text))
    }

    fn insert(&mut self, id: PatternId, def: PatternDef) -> Result<PatternId, RegisterError> {
        let PatternDef { name, kind, body } = def;

        if let Some(name) = &name {
            if self.by_name.contains_key(name) {
                return Err(RegisterError::DuplicateName(name.clone()));
            }
        }
        let (penalty, shape) = match &body {
            PatternBody::Literal(text) if text.is_empty() => {
                return Err(RegisterError::EmptyLiteral);
            }
            PatternBody::Literal(text) => (0, crate::quote(text)),
            PatternBody::Tree(root) => {
                self.check_references(root)?;
                (
                    self.node_penalty(root),
                    self.describe_tree(root, DescribeMode::Full),
                )
            }
        };

        // Everything fallible is done; from here on the registry is mutated.
        if let PatternBody::Literal(text) = &body {
            let mut chars = text.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                self.literals.entry(ch).or_insert(id);
            }
        }
        if let Some(name) = &name {
            self.by_name.insert(name.clone(), id);
        }
        self.by_shape.entry(shape.clone()).or_default().push(id);

        if self.slots.len() <= id.index() {
            self.slots.resize_with(id.index() + 1, || None);
        }
        self.slots[id.index()] = Some(Pattern {
            id,
            name,
            kind,
            body,
            penalty,
            shape,
        });
        self.next_id = self.next_id.max(id.raw().saturating_add(1));
        self.len += 1;
        Ok(id)
    }

    fn check_references(&self, root: &PatternNode) -> Result<(), RegisterError> {
        let mut missing = None;
        root.for_each_reference(&mut |id| {
            if missing.is_none() && !self.contains(id) {
                missing = Some(id);
            }
        });
        match missing {
            Some(id) => Err(RegisterError::UnknownPattern(id)),
            None => Ok(()),
        }
    }

    /// Remove a pattern, freeing its name and shape slot. The id is not reused.
    pub fn unregister(&mut self, id: PatternId) -> Option<Pattern> {
        let pattern = self.slots.get_mut(id.index())?.take()?;

        if let Some(name) = &pattern.name {
            if self.by_name.get(name) == Some(&id) {
                self.by_name.remove(name);
            }
        }
        if let Some(ids) = self.by_shape.get_mut(&pattern.shape) {
            ids.retain(|other| *other != id);
            if ids.is_empty() {
                self.by_shape.remove(&pattern.shape);
            }
        }
        self.literals.retain(|_, literal| *literal != id);
        self.len -= 1;
        Some(pattern)
    }

    /// Rename a pattern and change its kind, e.g. to promote an experiment
    /// that turned out to be a known building block.
    pub fn promote(
        &mut self,
        id: PatternId,
        name: &str,
        kind: crate::PatternKind,
    ) -> Result<(), RegisterError> {
        if !self.contains(id) {
            return Err(RegisterError::UnknownPattern(id));
        }
        match self.by_name.get(name) {
            Some(owner) if *owner != id => {
                return Err(RegisterError::DuplicateName(name.to_string()));
            }
            _ => {}
        }
        let Some(pattern) = self.slots.get_mut(id.index()).and_then(Option::as_mut) else {
            return Err(RegisterError::UnknownPattern(id));
        };
        if let Some(old) = pattern.name.replace(name.to_string()) {
            self.by_name.remove(&old);
        }
        pattern.kind = kind;
        self.by_name.insert(name.to_string(), id);
        Ok(())
    }

    /// Patterns whose tree references `id` anywhere.
    pub fn dependents(&self, id: PatternId) -> Vec<PatternId> {
        self.iter()
            .filter(|p| p.id != id && p.depends_on(id))
            .map(Pattern::id)
            .collect()
    }

    /// Complexity cost of a tree: every node costs one, look-around two more,
    /// any quantifier other than `{1,1}` one more; a reference adds the
    /// referenced pattern's penalty, an alternation its costliest sequence.
    pub fn node_penalty(&self, node: &PatternNode) -> u32 {
        tokd_stack::with_stack(|| {
            let mut penalty: u32 = 1;
            if node.look != Look::Here {
                penalty += 2;
            }
            if !node.quantity.is_one() {
                penalty += 1;
            }
            let inner = match &node.kind {
                NodeKind::Reference(id) => self.get(*id).map_or(0, Pattern::penalty),
                NodeKind::Alternation(alts) => alts
                    .iter()
                    .map(|seq| {
                        seq.iter()
                            .map(|n| self.node_penalty(n))
                            .fold(0_u32, u32::saturating_add)
                    })
                    .max()
                    .unwrap_or(0),
            };
            penalty.saturating_add(inner)
        })
    }
}
