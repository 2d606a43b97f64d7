//! Editing operations on identifier formats.
//!
//! Every operation takes `&self` and returns a new [`IdentifierFormat`]; the
//! model is immutable data between operations, so callers can diff the
//! before/after values for dirty tracking or undo.

use crate::catalog::defaults_for;
use crate::error::EditError;
use crate::id::TokenId;
use crate::model::IdentifierFormat;
use crate::token::{TokenInstance, TokenKind, TokenParams};

impl IdentifierFormat {
    /// Appends a new token of `kind` with catalog defaults and a fresh ID.
    #[must_use]
    pub fn add_element(&self, kind: TokenKind) -> IdentifierFormat {
        let mut next = self.clone();
        next.elements.push(TokenInstance::new(defaults_for(kind)));
        next
    }

    /// Removes the token with `id`. No-op if the ID is not present.
    #[must_use]
    pub fn remove_element(&self, id: &TokenId) -> IdentifierFormat {
        let mut next = self.clone();
        next.elements.retain(|t| t.id != *id);
        next
    }

    /// Replaces the params of the token with `id`, keeping its ID and position.
    ///
    /// The token's kind is immutable: `params` of a different kind are
    /// rejected with [`EditError::KindMismatch`].
    pub fn update_element(
        &self,
        id: &TokenId,
        params: TokenParams,
    ) -> Result<IdentifierFormat, EditError> {
        let Some(index) = self.position(id) else {
            return Err(EditError::UnknownToken(*id));
        };

        let current = self.elements[index].kind();
        if params.kind() != current {
            return Err(EditError::KindMismatch {
                current,
                requested: params.kind(),
            });
        }

        let mut next = self.clone();
        next.elements[index].params = params;
        Ok(next)
    }

    /// Moves the token with `id` to `to_index`, clamped to `[0, len-1]`.
    ///
    /// No-op (a plain clone) if the ID is not present or the clamped target
    /// equals the token's current position.
    #[must_use]
    pub fn move_element(&self, id: &TokenId, to_index: usize) -> IdentifierFormat {
        let Some(from) = self.position(id) else {
            return self.clone();
        };

        let to = to_index.min(self.elements.len() - 1);
        if to == from {
            return self.clone();
        }

        let mut next = self.clone();
        let token = next.elements.remove(from);
        next.elements.insert(to, token);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::SequenceScope;

    fn four_guids() -> IdentifierFormat {
        IdentifierFormat::new("-")
            .add_element(TokenKind::Guid)
            .add_element(TokenKind::Guid)
            .add_element(TokenKind::Guid)
            .add_element(TokenKind::Guid)
    }

    fn ids(format: &IdentifierFormat) -> Vec<TokenId> {
        format.elements.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_appends_with_defaults_and_fresh_id() {
        let format = IdentifierFormat::new("-");
        let next = format.add_element(TokenKind::Sequence);

        assert!(format.is_empty());
        assert_eq!(next.len(), 1);
        assert_eq!(next.elements[0].params, defaults_for(TokenKind::Sequence));
    }

    #[test]
    fn test_add_never_reuses_ids() {
        let format = four_guids();
        let unique: std::collections::HashSet<_> = ids(&format).into_iter().collect();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_remove_element() {
        let format = four_guids();
        let victim = format.elements[1].id;

        let next = format.remove_element(&victim);
        assert_eq!(next.len(), 3);
        assert!(next.element(&victim).is_none());
        // Original untouched.
        assert_eq!(format.len(), 4);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let format = four_guids();
        let next = format.remove_element(&TokenId::new());
        assert_eq!(next, format);
    }

    #[test]
    fn test_update_element_replaces_params_in_place() {
        let format = IdentifierFormat::new("-")
            .add_element(TokenKind::FixedText)
            .add_element(TokenKind::Sequence);
        let id = format.elements[1].id;

        let next = format
            .update_element(
                &id,
                TokenParams::Sequence {
                    pad: 6,
                    scope: SequenceScope::Global,
                },
            )
            .unwrap();

        assert_eq!(next.elements[1].id, id);
        assert_eq!(
            next.elements[1].params,
            TokenParams::Sequence {
                pad: 6,
                scope: SequenceScope::Global
            }
        );
    }

    #[test]
    fn test_update_unknown_token() {
        let format = four_guids();
        let result = format.update_element(&TokenId::new(), TokenParams::Guid);
        assert!(matches!(result, Err(EditError::UnknownToken(_))));
    }

    #[test]
    fn test_update_rejects_kind_change() {
        let format = IdentifierFormat::new("-").add_element(TokenKind::Guid);
        let id = format.elements[0].id;

        let result = format.update_element(
            &id,
            TokenParams::FixedText {
                value: Some("INV".to_string()),
            },
        );

        assert_eq!(
            result.unwrap_err(),
            EditError::KindMismatch {
                current: TokenKind::Guid,
                requested: TokenKind::FixedText,
            }
        );
    }

    #[test]
    fn test_move_first_to_index_two() {
        let format = four_guids();
        let before = ids(&format);

        let next = format.move_element(&before[0], 2);

        // The moved token lands at the requested index.
        assert_eq!(ids(&next), vec![before[1], before[2], before[0], before[3]]);
        assert_eq!(next.elements[2].id, before[0]);
    }

    #[test]
    fn test_move_to_own_index_is_noop() {
        let format = four_guids();
        let id = format.elements[2].id;
        assert_eq!(format.move_element(&id, 2), format);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let format = four_guids();
        assert_eq!(format.move_element(&TokenId::new(), 0), format);
    }

    #[test]
    fn test_move_clamps_past_end() {
        let format = four_guids();
        let before = ids(&format);

        let next = format.move_element(&before[0], 99);
        assert_eq!(ids(&next), vec![before[1], before[2], before[3], before[0]]);
    }

    proptest::proptest! {
        #[test]
        fn prop_move_is_a_splice(len in 1usize..8, from in 0usize..8, to in 0usize..16) {
            let mut format = IdentifierFormat::new("-");
            for _ in 0..len {
                format = format.add_element(TokenKind::Guid);
            }

            let from = from % len;
            let id = format.elements[from].id;
            let moved = format.move_element(&id, to);

            // Same tokens, just reordered.
            let mut before = ids(&format);
            let mut after = ids(&moved);
            before.sort();
            after.sort();
            proptest::prop_assert_eq!(before, after);

            // The moved token sits at the clamped target index.
            let landed = moved.elements.iter().position(|t| t.id == id);
            proptest::prop_assert_eq!(landed, Some(to.min(len - 1)));
        }
    }

    #[test]
    fn test_move_preserves_ids_and_params() {
        let format = IdentifierFormat::new("-")
            .add_element(TokenKind::FixedText)
            .add_element(TokenKind::Date);
        let id = format.elements[1].id;

        let next = format.move_element(&id, 0);
        assert_eq!(next.elements[0].id, id);
        assert_eq!(next.elements[0].params, defaults_for(TokenKind::Date));
    }
}
