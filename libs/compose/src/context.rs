//! Compose context: the external state tokens render against.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, Utc};

/// Sequence value substituted in preview mode, where no counter is allocated.
pub const PREVIEW_SEQUENCE_VALUE: u64 = 1;

/// Caller-supplied state for one composition.
///
/// Deterministic inputs live here; only the random token kinds draw on
/// anything else. Preview and commit mode build the same struct, they just
/// fill it from different sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeContext {
    /// The date `date` tokens render. Resolved once at construction so a
    /// composition near midnight stays self-consistent.
    pub date: NaiveDate,

    /// Current counter value for `sequence` tokens. Synthetic 1 in preview;
    /// an atomic backend allocation in commit mode.
    pub sequence_value: u64,

    /// Field values of the record being identified, for `fieldReference`
    /// tokens. Sample values in preview, real values in commit mode.
    pub fields: BTreeMap<String, String>,
}

impl ComposeContext {
    /// Preview context: today's UTC date, synthetic sequence value, no fields.
    pub fn preview() -> Self {
        Self {
            date: Utc::now().date_naive(),
            sequence_value: PREVIEW_SEQUENCE_VALUE,
            fields: BTreeMap::new(),
        }
    }

    /// Preview context using the local time zone's date.
    pub fn preview_local() -> Self {
        Self {
            date: Local::now().date_naive(),
            ..Self::preview()
        }
    }

    /// Commit context: today's UTC date and a backend-allocated sequence value.
    pub fn commit(sequence_value: u64) -> Self {
        Self {
            sequence_value,
            ..Self::preview()
        }
    }

    /// Overrides the date (wins over the zone chosen at construction).
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    #[must_use]
    pub fn with_sequence_value(mut self, value: u64) -> Self {
        self.sequence_value = value;
        self
    }

    /// Replaces the field map.
    #[must_use]
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Adds or replaces a single field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

impl Default for ComposeContext {
    fn default() -> Self {
        Self::preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_defaults() {
        let ctx = ComposeContext::preview();
        assert_eq!(ctx.sequence_value, PREVIEW_SEQUENCE_VALUE);
        assert!(ctx.fields.is_empty());
    }

    #[test]
    fn test_commit_carries_allocated_value() {
        let ctx = ComposeContext::commit(42);
        assert_eq!(ctx.sequence_value, 42);
    }

    #[test]
    fn test_builder_setters() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let ctx = ComposeContext::preview()
            .with_date(date)
            .with_field("brand", "Acme")
            .with_field("brand", "Apex");

        assert_eq!(ctx.date, date);
        assert_eq!(ctx.fields.get("brand").map(String::as_str), Some("Apex"));
    }
}
