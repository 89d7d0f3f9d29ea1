//! Path-based view resolution.
//!
//! Views are registered as an ordered list of descriptors. Resolution walks
//! the list and the first pattern that matches the path structurally wins;
//! paths nothing claims fall back to the registry's default descriptor, so
//! every path resolves to something.

mod pattern;
mod registry;

pub use pattern::PathPattern;
pub use registry::{default_registry, ResolvedView, ViewDescriptor, ViewRegistry};
