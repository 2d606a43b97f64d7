//! Structural validation of identifier formats.
//!
//! Validation is pure and total: it never fails, it only reports. Editing and
//! preview stay available while errors exist; persistence and commit-mode
//! minting are what callers must block on a non-empty error list.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::IdentifierFormat;
use crate::token::{TokenParams, SEQUENCE_PAD_MAX, SEQUENCE_PAD_MIN};

/// Machine-distinguishable reason for a validation error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationReason {
    /// A `fixedText` token has no value at all (not merely an empty string).
    #[error("fixed text token has not been given a value")]
    EmptyFixedText,

    /// A `fieldReference` token has an empty field key.
    #[error("field reference token is missing a field key")]
    MissingFieldKey,

    /// A `sequence` token's pad width is outside [1,12].
    #[error(
        "sequence pad width must be between {min} and {max}",
        min = SEQUENCE_PAD_MIN,
        max = SEQUENCE_PAD_MAX
    )]
    InvalidSequencePad,

    /// A token ID appears more than once in the format.
    ///
    /// The editor never produces this; formats deserialized from the wire can.
    #[error("token ID duplicates an earlier element")]
    DuplicateTokenId,
}

/// One validation finding, located at a 1-based element position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// 1-based position of the offending element.
    pub position: usize,
    pub reason: ValidationReason,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "element {}: {}", self.position, self.reason)
    }
}

/// Validates a format, returning every finding in element order.
///
/// A format with zero elements is valid. Duplicate IDs are reported at the
/// position of the second (and later) occurrences.
pub fn validate(format: &IdentifierFormat) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, token) in format.elements.iter().enumerate() {
        let position = index + 1;

        if !seen_ids.insert(token.id) {
            errors.push(ValidationError {
                position,
                reason: ValidationReason::DuplicateTokenId,
            });
        }

        match &token.params {
            TokenParams::FixedText { value: None } => {
                errors.push(ValidationError {
                    position,
                    reason: ValidationReason::EmptyFixedText,
                });
            }
            TokenParams::FieldReference { key } if key.is_empty() => {
                errors.push(ValidationError {
                    position,
                    reason: ValidationReason::MissingFieldKey,
                });
            }
            TokenParams::Sequence { pad, .. }
                if !(SEQUENCE_PAD_MIN..=SEQUENCE_PAD_MAX).contains(pad) =>
            {
                errors.push(ValidationError {
                    position,
                    reason: ValidationReason::InvalidSequencePad,
                });
            }
            _ => {}
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IdentifierFormat;
    use crate::token::{SequenceScope, TokenInstance, TokenKind};

    fn format_with(params: Vec<TokenParams>) -> IdentifierFormat {
        let mut format = IdentifierFormat::new("-");
        format.elements = params.into_iter().map(TokenInstance::new).collect();
        format
    }

    #[test]
    fn test_empty_format_is_valid() {
        assert!(validate(&IdentifierFormat::default()).is_empty());
    }

    #[test]
    fn test_unconfigured_fixed_text_reported_at_position_one() {
        let format = format_with(vec![TokenParams::FixedText { value: None }]);
        let errors = validate(&format);

        assert_eq!(
            errors,
            vec![ValidationError {
                position: 1,
                reason: ValidationReason::EmptyFixedText
            }]
        );
    }

    #[test]
    fn test_intentionally_empty_fixed_text_is_valid() {
        let format = format_with(vec![TokenParams::FixedText {
            value: Some(String::new()),
        }]);
        assert!(validate(&format).is_empty());
    }

    #[test]
    fn test_missing_field_key() {
        let format = format_with(vec![
            TokenParams::Guid,
            TokenParams::FieldReference { key: String::new() },
        ]);
        let errors = validate(&format);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].position, 2);
        assert_eq!(errors[0].reason, ValidationReason::MissingFieldKey);
    }

    #[test]
    fn test_sequence_pad_bounds() {
        for pad in [0, 13] {
            let format = format_with(vec![TokenParams::Sequence {
                pad,
                scope: SequenceScope::PerInventory,
            }]);
            let errors = validate(&format);
            assert_eq!(errors[0].reason, ValidationReason::InvalidSequencePad);
        }

        for pad in [1, 12] {
            let format = format_with(vec![TokenParams::Sequence {
                pad,
                scope: SequenceScope::PerInventory,
            }]);
            assert!(validate(&format).is_empty());
        }
    }

    #[test]
    fn test_duplicate_token_id_reported_at_second_occurrence() {
        let mut format = IdentifierFormat::new("-").add_element(TokenKind::Guid);
        let duplicate = format.elements[0].clone();
        format.elements.push(duplicate);

        let errors = validate(&format);
        assert_eq!(
            errors,
            vec![ValidationError {
                position: 2,
                reason: ValidationReason::DuplicateTokenId
            }]
        );
    }

    #[test]
    fn test_multiple_findings_in_element_order() {
        let format = format_with(vec![
            TokenParams::FixedText { value: None },
            TokenParams::Date {
                format: "YYYY".to_string(),
            },
            TokenParams::Sequence {
                pad: 0,
                scope: SequenceScope::Global,
            },
        ]);

        let errors = validate(&format);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].position, 1);
        assert_eq!(errors[1].position, 3);
    }

    #[test]
    fn test_error_display_names_position() {
        let format = format_with(vec![TokenParams::FixedText { value: None }]);
        let rendered = validate(&format)[0].to_string();
        assert!(rendered.starts_with("element 1:"));
    }
}
