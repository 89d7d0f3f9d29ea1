//! Data fetching against the portal backend.
//!
//! A [`FetchClient`] issues requests described by [`ListRequest`] values,
//! normalizes every list response into a [`ResultEnvelope`], and memoizes
//! responses when [`FetchOptions`] ask for it. [`Query`] is the per-request
//! state a caller polls; [`endpoints`] has one typed wrapper per backend
//! resource.

mod cache;
mod client;
pub mod endpoints;
mod envelope;
mod error;
mod options;
mod query;
mod request;

pub use client::FetchClient;
pub use envelope::{EnvelopeError, ResultEnvelope};
pub use error::FetchError;
pub use options::FetchOptions;
pub use query::Query;
pub use request::ListRequest;
