//! # shelfmark-format
//!
//! Custom identifier format model for the shelfmark platform.
//!
//! An [`IdentifierFormat`] is an ordered list of typed token instances plus a
//! separator. Each token is one building block of a human-readable record
//! identifier: a fixed string, a date stamp, a zero-padded counter, a GUID, a
//! random number, or a reference to a field of the record being identified.
//!
//! This crate owns:
//!
//! - The wire-shaped data model ([`IdentifierFormat`], [`TokenInstance`],
//!   [`TokenParams`]) shared with the backend as JSON
//! - The token catalog (palette defaults and labels per [`TokenKind`])
//! - Structural validation ([`validate`]) with positioned reason codes
//! - Immutable editing operations (add / remove / update / move) that always
//!   return a new format value
//!
//! Rendering formats into identifier strings lives in `shelfmark-compose`.

mod catalog;
mod editor;
mod error;
mod id;
mod macros;
mod model;
mod token;
mod validate;

pub use catalog::{defaults_for, label};
pub use error::{EditError, IdError};
pub use id::{InventoryId, TokenId};
pub use model::IdentifierFormat;
pub use token::{
    SequenceScope, TokenInstance, TokenKind, TokenParams, SEQUENCE_PAD_MAX, SEQUENCE_PAD_MIN,
};
pub use validate::{validate, ValidationError, ValidationReason};

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
