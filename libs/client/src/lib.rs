//! # shelfmark-client
//!
//! HTTP client for the identifier persistence & counter backend.
//!
//! The backend owns everything this workspace does not: storing an
//! inventory's [`IdentifierFormat`], re-validating it server-side on save,
//! and allocating sequence counter values with an atomic increment-and-read
//! (the same `(scope, key)` never yields a value twice under concurrent
//! callers).
//!
//! The client performs no retries. A failed call surfaces as a
//! [`ClientError`] and leaves the caller's in-memory format untouched, so an
//! editing session never loses state to a flaky save.
//!
//! [`IdentifierFormat`]: shelfmark_format::IdentifierFormat

mod client;
mod error;

pub use client::ApiClient;
pub use error::ClientError;
