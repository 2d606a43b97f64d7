//! Token model: the typed building blocks of an identifier format.

use serde::{Deserialize, Serialize};

use crate::id::TokenId;

/// The generator type of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    /// A literal string, rendered verbatim.
    FixedText,
    /// A date stamp over `YYYY` / `MM` / `DD` placeholders.
    Date,
    /// A zero-padded counter drawn from a backend sequence.
    Sequence,
    /// A random UUID v4.
    Guid,
    /// A uniform random u32 in decimal.
    RandomInt32,
    /// Exactly 6 random decimal digits.
    RandomDigits6,
    /// Exactly 9 random decimal digits.
    RandomDigits9,
    /// The value of a named field of the record being identified.
    FieldReference,
}

impl TokenKind {
    /// All kinds in palette order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::FixedText,
        TokenKind::Date,
        TokenKind::Sequence,
        TokenKind::Guid,
        TokenKind::RandomInt32,
        TokenKind::RandomDigits6,
        TokenKind::RandomDigits9,
        TokenKind::FieldReference,
    ];
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches the wire names.
        let s = match self {
            TokenKind::FixedText => "fixedText",
            TokenKind::Date => "date",
            TokenKind::Sequence => "sequence",
            TokenKind::Guid => "guid",
            TokenKind::RandomInt32 => "randomInt32",
            TokenKind::RandomDigits6 => "randomDigits6",
            TokenKind::RandomDigits9 => "randomDigits9",
            TokenKind::FieldReference => "fieldReference",
        };
        write!(f, "{}", s)
    }
}

/// The counter namespace a `sequence` token draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SequenceScope {
    /// One counter per inventory, keyed by inventory ID.
    #[default]
    PerInventory,
    /// A single platform-wide counter.
    Global,
}

impl std::fmt::Display for SequenceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceScope::PerInventory => write!(f, "perInventory"),
            SequenceScope::Global => write!(f, "global"),
        }
    }
}

/// Allowed zero-padding range for `sequence` tokens.
pub const SEQUENCE_PAD_MIN: u32 = 1;
pub const SEQUENCE_PAD_MAX: u32 = 12;

/// Kind-specific parameters of a token.
///
/// Serialized internally tagged on `kind`, so one token instance flattens to
/// `{"id": "tok_…", "kind": "date", "format": "YYYYMMDD"}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TokenParams {
    /// Literal text. `value: None` means the token has not been configured
    /// yet and fails validation; `Some("")` is intentionally empty and valid.
    FixedText {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },

    /// Date pattern. Placeholders `YYYY`, `MM`, `DD` are substituted; any
    /// other text passes through literally.
    Date { format: String },

    /// Backend-allocated counter, left-padded with zeros to `pad` digits.
    #[serde(rename_all = "camelCase")]
    Sequence {
        pad: u32,
        #[serde(default)]
        scope: SequenceScope,
    },

    Guid,

    RandomInt32,

    RandomDigits6,

    RandomDigits9,

    /// Reference to a named attribute of the record being identified.
    FieldReference {
        #[serde(default)]
        key: String,
    },
}

impl TokenParams {
    /// The kind these params belong to.
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenParams::FixedText { .. } => TokenKind::FixedText,
            TokenParams::Date { .. } => TokenKind::Date,
            TokenParams::Sequence { .. } => TokenKind::Sequence,
            TokenParams::Guid => TokenKind::Guid,
            TokenParams::RandomInt32 => TokenKind::RandomInt32,
            TokenParams::RandomDigits6 => TokenKind::RandomDigits6,
            TokenParams::RandomDigits9 => TokenKind::RandomDigits9,
            TokenParams::FieldReference { .. } => TokenKind::FieldReference,
        }
    }
}

/// One configured element of an identifier format.
///
/// The `id` is assigned at creation and stable across reorders; the `kind`
/// (carried inside `params`) is immutable for the lifetime of the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInstance {
    pub id: TokenId,

    #[serde(flatten)]
    pub params: TokenParams,
}

impl TokenInstance {
    /// Creates a token with a fresh ID and the given params.
    pub fn new(params: TokenParams) -> Self {
        Self {
            id: TokenId::new(),
            params,
        }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.params.kind()
    }
}
