//! State-container primitives.
//!
//! This module provides the building blocks for unidirectional data flow
//! in the client: independent state slices, typed intents, pure reducers,
//! and a dependency-injected container that commits transitions atomically.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Reader
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: an immutable value; transitions produce a replacement
//! - **Intent**: a typed setter (user action or system event)
//! - **Reducer**: a pure function `(State, Intent) -> State`
//! - **Store**: the single owner of the live state; commits are atomic

mod container;
mod intent;
mod produce;
mod reducer;
mod state;

pub use container::Store;
pub use intent::Intent;
pub use produce::{produce, try_produce};
pub use reducer::Reducer;
pub use state::SliceState;
