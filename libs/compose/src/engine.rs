//! The composer engine: tokens + separator → identifier string.

use std::collections::BTreeMap;

use shelfmark_format::IdentifierFormat;

use crate::context::ComposeContext;
use crate::generators;

/// Composes `format` against `ctx`.
///
/// An empty format composes to the empty string regardless of context or
/// separator. Otherwise each element renders in order and the segments are
/// joined with the separator, strictly between consecutive segments.
///
/// Never fails: unresolved tokens degrade per [`generators::render`]. Callers
/// minting real identifiers should refuse to commit while the format has
/// validation errors; that gate lives with the caller, not here.
pub fn compose(format: &IdentifierFormat, ctx: &ComposeContext) -> String {
    if format.elements.is_empty() {
        return String::new();
    }

    let segments: Vec<String> = format
        .elements
        .iter()
        .map(|token| generators::render(token, ctx))
        .collect();

    segments.join(&format.separator)
}

/// Preview composition with an empty field map.
pub fn preview(format: &IdentifierFormat) -> String {
    compose(format, &ComposeContext::preview())
}

/// Preview composition with sample field values.
pub fn preview_with(format: &IdentifierFormat, fields: BTreeMap<String, String>) -> String {
    compose(format, &ComposeContext::preview().with_fields(fields))
}
