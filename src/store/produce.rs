//! Copy-on-write state mutation.
//!
//! Every commit in the container goes through these helpers: edits are
//! applied to a draft clone, never to the live value, so a failed edit
//! leaves the caller's state untouched.

/// Apply `edit` to a draft clone of `state` and return the draft.
///
/// The original value is never modified; holders of other clones keep
/// seeing the old state.
pub fn produce<S, F>(state: &S, edit: F) -> S
where
    S: Clone,
    F: FnOnce(&mut S),
{
    let mut draft = state.clone();
    edit(&mut draft);
    draft
}

/// Fallible form of [`produce`].
///
/// On `Err` the draft is discarded and the error is returned to the
/// caller; the input state is unchanged. A panicking edit likewise
/// unwinds before any commit, because it only ever saw the draft.
pub fn try_produce<S, E, F>(state: &S, edit: F) -> Result<S, E>
where
    S: Clone,
    F: FnOnce(&mut S) -> Result<(), E>,
{
    let mut draft = state.clone();
    edit(&mut draft)?;
    Ok(draft)
}
