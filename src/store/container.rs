//! Dependency-injected state container.
//!
//! The container owns the live aggregate state behind a read-write lock.
//! It is constructed once at startup and passed to whoever needs it; there
//! is no ambient global. Cloned handles share the same state.

use std::sync::Arc;

use parking_lot::RwLock;

use super::produce::try_produce;
use super::reducer::Reducer;

struct Shared<S> {
    state: S,
    version: u64,
}

/// Shared handle to the aggregate client state.
///
/// All transitions go through the composed reducer `R` (via [`Store::dispatch`])
/// or a draft-based edit (via [`Store::try_update`]). Commits are atomic:
/// readers observe either the previous aggregate or the next one, never a
/// partially written value.
pub struct Store<R: Reducer> {
    inner: Arc<RwLock<Shared<R::State>>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a container holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Shared {
                state: initial,
                version: 0,
            })),
        }
    }

    /// Run an intent through the composed reducer and commit the result.
    ///
    /// A transition that produces a state equal to the current one is a
    /// no-op: nothing is swapped and the version counter stays put.
    pub fn dispatch(&self, intent: impl Into<R::Intent>) {
        let mut shared = self.inner.write();
        let next = R::reduce(shared.state.clone(), intent.into());
        if next != shared.state {
            shared.state = next;
            shared.version += 1;
            tracing::debug!(version = shared.version, "state committed");
        }
    }

    /// Apply a fallible edit to a draft of the state.
    ///
    /// On `Ok` the draft replaces the live state in one swap. On `Err` the
    /// error propagates to the caller and the observable state (including
    /// the version counter) is exactly what it was before the call.
    pub fn try_update<E>(&self, edit: impl FnOnce(&mut R::State) -> Result<(), E>) -> Result<(), E> {
        let mut shared = self.inner.write();
        let next = try_produce(&shared.state, edit)?;
        if next != shared.state {
            shared.state = next;
            shared.version += 1;
            tracing::debug!(version = shared.version, "state committed");
        }
        Ok(())
    }

    /// Clone out the current aggregate state.
    pub fn snapshot(&self) -> R::State {
        self.inner.read().state.clone()
    }

    /// Project a value out of the current state under the read lock.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.inner.read().state)
    }

    /// Monotonic commit counter; bumps once per state-changing commit.
    ///
    /// Cheap change detection for callers that poll instead of diffing
    /// whole snapshots.
    pub fn version(&self) -> u64 {
        self.inner.read().version
    }
}
