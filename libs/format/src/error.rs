//! Error types for ID parsing and format editing.

use thiserror::Error;

use crate::id::TokenId;
use crate::token::TokenKind;

/// Errors that can occur when parsing a typed ID string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The ID has the wrong prefix for its type.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ULID portion of the ID is invalid.
    #[error("invalid ULID: {0}")]
    InvalidUlid(String),
}

/// Errors from format editing operations.
///
/// Only [`IdentifierFormat::update_element`](crate::IdentifierFormat::update_element)
/// can fail; add, remove, and move degrade to no-ops instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The referenced token is not part of this format.
    #[error("token {0} not found in format")]
    UnknownToken(TokenId),

    /// Replacement params belong to a different token kind.
    ///
    /// A token's kind is fixed at creation; reconfiguring it means removing
    /// the token and adding a new one.
    #[error("cannot change token kind from {current} to {requested}")]
    KindMismatch {
        current: TokenKind,
        requested: TokenKind,
    },
}
