//! Token catalog: the palette of available token kinds.
//!
//! A read-only table mapping each [`TokenKind`] to the params a freshly added
//! token starts with, plus a display label for the editing palette. No
//! validation, no side effects.

use crate::token::{SequenceScope, TokenKind, TokenParams};

/// The params a newly added token of `kind` starts with.
pub fn defaults_for(kind: TokenKind) -> TokenParams {
    match kind {
        // Unconfigured on purpose: the editor highlights it until the user
        // fills in a value (possibly the empty string).
        TokenKind::FixedText => TokenParams::FixedText { value: None },
        TokenKind::Date => TokenParams::Date {
            format: "YYYYMMDD".to_string(),
        },
        TokenKind::Sequence => TokenParams::Sequence {
            pad: 1,
            scope: SequenceScope::PerInventory,
        },
        TokenKind::Guid => TokenParams::Guid,
        TokenKind::RandomInt32 => TokenParams::RandomInt32,
        TokenKind::RandomDigits6 => TokenParams::RandomDigits6,
        TokenKind::RandomDigits9 => TokenParams::RandomDigits9,
        TokenKind::FieldReference => TokenParams::FieldReference { key: String::new() },
    }
}

/// Human-readable palette label for `kind`.
pub fn label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::FixedText => "Fixed text",
        TokenKind::Date => "Date",
        TokenKind::Sequence => "Sequence",
        TokenKind::Guid => "GUID",
        TokenKind::RandomInt32 => "Random 32-bit number",
        TokenKind::RandomDigits6 => "Random 6 digits",
        TokenKind::RandomDigits9 => "Random 9 digits",
        TokenKind::FieldReference => "Field value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_kind() {
        for kind in TokenKind::ALL {
            assert_eq!(defaults_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_fixed_text_defaults_unconfigured() {
        assert_eq!(
            defaults_for(TokenKind::FixedText),
            TokenParams::FixedText { value: None }
        );
    }

    #[test]
    fn test_every_kind_has_a_label() {
        for kind in TokenKind::ALL {
            assert!(!label(kind).is_empty());
        }
    }
}
