//! Base trait for intents (typed setters) on state slices.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (tab changes, filter edits)
/// - System events (seeded configuration, fetched lookups)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
