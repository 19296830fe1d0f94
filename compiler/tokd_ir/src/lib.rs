//! Tokd IR - core data structures for the token discovery engine.
//!
//! This crate contains:
//! - [`PatternId`] and [`Span`] handles
//! - [`Quantity`], [`Look`] and [`PatternKind`] node metadata
//! - [`PatternNode`], the tagged tree a compiled pattern is made of
//! - [`PatternRegistry`], the arena that owns every registered [`Pattern`]
//! - Structural reduction ([`reduce`]) and canonical descriptions
//!
//! # Design
//!
//! - **Ids, not pointers**: nodes refer to other patterns by [`PatternId`];
//!   the registry is the only owner, so trees are plain values that can be
//!   cloned and spliced freely during proposal synthesis.
//! - **Unrepresentable invalid states**: a node is either a reference or an
//!   alternation ([`NodeKind`]); a pattern is either a literal or a tree
//!   ([`PatternBody`]).
//! - **Functional identity**: every registered pattern carries its full-depth
//!   description ("shape"); two patterns with the same shape match the same
//!   text the same way.

mod describe;
mod ids;
mod kind;
mod node;
mod pattern;
mod reduce;
mod registry;

pub use describe::{quote, DescribeMode};
pub use ids::{PatternId, Span};
pub use kind::{Look, ParseKindError, PatternKind, Quantity};
pub use node::{NodeKind, PatternNode, Sequence};
pub use pattern::{is_safe_name, Pattern, PatternBody, PatternDef};
pub use reduce::reduce;
pub use registry::{PatternRegistry, RegisterError};
