//! The identifier format aggregate.

use serde::{Deserialize, Serialize};

use crate::id::TokenId;
use crate::token::{SequenceScope, TokenInstance, TokenKind, TokenParams};

/// A custom identifier format for an inventory's records.
///
/// The aggregate that crosses the backend boundary as JSON. Element order is
/// render order; it changes only through the explicit editing operations in
/// this crate, all of which return a new value rather than mutating in place.
///
/// When `enabled` is false the inventory falls back to its default identifier
/// scheme and this format is kept only as a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierFormat {
    /// Whether this format is in force for the inventory.
    #[serde(default)]
    pub enabled: bool,

    /// Inserted between consecutive rendered tokens. May be empty.
    #[serde(default)]
    pub separator: String,

    /// Ordered token instances; order determines render order.
    #[serde(default)]
    pub elements: Vec<TokenInstance>,
}

impl Default for IdentifierFormat {
    fn default() -> Self {
        Self {
            enabled: false,
            separator: String::new(),
            elements: Vec::new(),
        }
    }
}

impl IdentifierFormat {
    /// Creates an empty, disabled format with the given separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Looks up an element by token ID.
    pub fn element(&self, id: &TokenId) -> Option<&TokenInstance> {
        self.elements.iter().find(|t| t.id == *id)
    }

    /// Position of an element by token ID.
    pub(crate) fn position(&self, id: &TokenId) -> Option<usize> {
        self.elements.iter().position(|t| t.id == *id)
    }

    /// The scope of the first `sequence` token, if the format has one.
    ///
    /// A mint allocates one counter value per identifier; when several
    /// sequence tokens are present they share that allocation, and the first
    /// token's scope decides which counter is ticked.
    pub fn sequence_scope(&self) -> Option<SequenceScope> {
        self.elements.iter().find_map(|t| match t.params {
            TokenParams::Sequence { scope, .. } => Some(scope),
            _ => None,
        })
    }

    /// Whether the format contains at least one token of `kind`.
    pub fn contains_kind(&self, kind: TokenKind) -> bool {
        self.elements.iter().any(|t| t.kind() == kind)
    }
}
