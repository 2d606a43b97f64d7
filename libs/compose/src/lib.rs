//! # shelfmark-compose
//!
//! Renders a `shelfmark-format` [`IdentifierFormat`] into an identifier
//! string.
//!
//! One algorithm serves two invocation modes, differing only in the
//! [`ComposeContext`] the caller supplies:
//!
//! - **Preview**: synthetic data (sequence value 1, wall-clock date, sample
//!   fields). Recomputed on every edit, strictly side-effect free: no counter
//!   increment, no I/O.
//! - **Commit**: the sequence value comes from the backend's atomic
//!   increment-and-read and the fields from the real record being identified.
//!   Allocation and persistence live in `shelfmark-client`; this crate stays
//!   synchronous and pure apart from its random token kinds.
//!
//! Every token generator is total. A format that still has validation errors
//! composes anyway, degrading per token (an unresolved field renders as a
//! `{placeholder}`), so previews stay legible mid-edit.

mod context;
mod engine;
mod generators;

pub use context::{ComposeContext, PREVIEW_SEQUENCE_VALUE};
pub use engine::{compose, preview, preview_with};
pub use generators::render;

pub use shelfmark_format::IdentifierFormat;
