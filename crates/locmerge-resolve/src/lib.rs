//! Leaf conflict-resolution policies for locmerge.
//!
//! A resolver decides, for one leaf, what survives when the old locale tree
//! is compared against the new one: the old value, the new value, or nothing.
//!
//! # Key Types
//!
//! - [`Resolver`] -- The per-leaf policy trait consumed by the merge engine
//! - [`ResolverKind`] -- The fixed catalogue: add, filter, sync, diff, combine

pub mod catalogue;
pub mod error;
pub mod resolver;

pub use catalogue::ResolverKind;
pub use error::ResolveError;
pub use resolver::{present, Resolver};
