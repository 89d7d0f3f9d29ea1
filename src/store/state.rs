//! Base trait for state slices.

/// Marker trait for slice state values.
///
/// Slice states should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (a slice owns its whole subtree; no slice reads another)
/// - Comparable (PartialEq so no-op transitions can be detected)
/// - Constructible empty (Default is the null fallback for seeding)
pub trait SliceState: Clone + PartialEq + Default + Send + 'static {}
