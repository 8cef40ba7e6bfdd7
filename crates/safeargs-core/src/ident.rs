//! Identifier normalization for raw schema keys.
//!
//! Raw argument names may contain hyphens, spaces, and dots. Two normalized
//! forms are derived from each key: a camelCase PHP property name and an
//! UPPER_SNAKE constant name. Both functions are total — any input string
//! produces an output. Consecutive separators yield empty segments, which
//! simply contribute nothing (a documented quirk of the format, not
//! corrected here).
//!
//! These are deliberately not ecosystem case conversions: the field form
//! lowercases the whole key before splitting (`userName` → `username`), and
//! the constant form never inserts boundaries at case changes
//! (`userName` → `USERNAME`).

/// Separator characters recognized in raw argument names.
const SEPARATORS: [char; 3] = ['-', ' ', '.'];

/// Derive the camelCase property name for a raw schema key.
///
/// The key is lowercased, separators (including pre-existing underscores)
/// split it into segments, and every segment after the first is
/// capitalized: `user-id` → `userId`, `a.b c` → `aBC`.
#[must_use]
pub fn field_name(raw: &str) -> String {
    let flattened = raw.to_lowercase().replace(SEPARATORS, "_");

    let mut out = String::with_capacity(flattened.len());
    for (i, segment) in flattened.split('_').enumerate() {
        if i == 0 {
            out.push_str(segment);
        } else if let Some(first) = segment.chars().next() {
            out.extend(first.to_uppercase());
            out.push_str(&segment[first.len_utf8()..]);
        }
    }
    out
}

/// Derive the UPPER_SNAKE constant name for a raw schema key.
///
/// Separators become underscores and the whole key is uppercased:
/// `user-id` → `USER_ID`. Unlike [`field_name`], case boundaries in the raw
/// key are not treated as word breaks.
#[must_use]
pub fn constant_name(raw: &str) -> String {
    raw.replace(SEPARATORS, "_").to_uppercase()
}
