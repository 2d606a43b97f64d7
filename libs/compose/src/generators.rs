//! Token value generators: one total function per token kind.
//!
//! Generators never fail and never panic; anything unresolved degrades to a
//! placeholder or a best-effort value so composition is always possible, even
//! for a format that still has validation errors.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use uuid::Uuid;

use shelfmark_format::{TokenInstance, TokenParams, SEQUENCE_PAD_MAX};

use crate::context::ComposeContext;

/// Renders one token against the given context.
pub fn render(token: &TokenInstance, ctx: &ComposeContext) -> String {
    match &token.params {
        TokenParams::FixedText { value } => value.clone().unwrap_or_default(),
        TokenParams::Date { format } => date_stamp(format, ctx.date),
        TokenParams::Sequence { pad, .. } => sequence(*pad, ctx.sequence_value),
        TokenParams::Guid => guid(),
        TokenParams::RandomInt32 => random_int32(),
        TokenParams::RandomDigits6 => random_digits(6),
        TokenParams::RandomDigits9 => random_digits(9),
        TokenParams::FieldReference { key } => field_reference(key, &ctx.fields),
    }
}

/// Substitutes `YYYY` / `MM` / `DD` placeholders in `pattern`, left to right,
/// longest placeholder first. Unrecognized text passes through literally.
fn date_stamp(pattern: &str, date: NaiveDate) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            let _ = write!(out, "{:04}", date.year());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            let _ = write!(out, "{:02}", date.month());
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            let _ = write!(out, "{:02}", date.day());
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }

    out
}

/// Left-pads the counter value with zeros to `pad` digits. Values wider than
/// `pad` render in full; the pad is a minimum width, not a truncation.
///
/// The width is clamped to [`SEQUENCE_PAD_MAX`]: an out-of-range pad is a
/// validation error, and rendering it must stay cheap rather than allocate a
/// pad-sized string on every recompute.
fn sequence(pad: u32, value: u64) -> String {
    let width = pad.min(SEQUENCE_PAD_MAX) as usize;
    format!("{:0width$}", value, width = width)
}

/// A random UUID v4 in canonical lowercase 8-4-4-4-12 form.
///
/// The uuid crate fixes the version and variant nibbles regardless of the
/// underlying random byte layout, and its v4 generator is backed by a
/// cryptographically strong source.
fn guid() -> String {
    Uuid::new_v4().to_string()
}

/// A uniform random u32 rendered as decimal digits.
fn random_int32() -> String {
    rand::rng().random::<u32>().to_string()
}

/// Exactly `count` independently uniform decimal digits, leading zeros kept.
fn random_digits(count: usize) -> String {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// The record's field value, or a `{key}` placeholder when the field is
/// absent so previews stay legible.
fn field_reference(key: &str, fields: &BTreeMap<String, String>) -> String {
    match fields.get(key) {
        Some(value) => value.clone(),
        None if key.is_empty() => "{field}".to_string(),
        None => format!("{{{key}}}"),
    }
}
