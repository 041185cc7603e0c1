//! Fixed ICU MessageFormat vocabularies and non-consuming match predicates.
//!
//! Every matcher takes the unconsumed remainder of a line and returns the
//! byte length of the match at its start (`0` for no match). Nothing here
//! advances a cursor; the scanner decides what to consume.
//!
//! Vocabulary words only match when followed by a word boundary: the next
//! byte must not be an ASCII word character (`[A-Za-z0-9_]`), so `one` does
//! not match inside `ones` and `=1` does not match inside `=1x`.

use crate::Cursor;

/// Argument type keywords, valid in header position.
pub const TYPE_KEYWORDS: &[&str] = &[
    "plural",
    "select",
    "selectordinal",
    "offset",
    "number",
    "date",
    "time",
];

/// Named plural/select selectors. Explicit `=<digits>` selectors are
/// matched separately by [`selector_len`].
pub const SELECTOR_KEYWORDS: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// Argument style keywords for `number`, `date` and `time` arguments.
pub const STYLE_KEYWORDS: &[&str] = &[
    "integer",
    "currency",
    "percent",
    "scientific",
    "short",
    "medium",
    "long",
    "full",
];

/// Returns `true` if `b` may start an identifier (`[A-Za-z_]`).
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Returns `true` if `b` is an ASCII word character (`[A-Za-z0-9_]`).
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns `true` if a word of length `len` at the start of `text` ends on
/// a word boundary.
fn ends_at_boundary(text: &str, len: usize) -> bool {
    !matches!(text.as_bytes().get(len), Some(&b) if is_word_byte(b))
}

/// Length of the identifier (`[A-Za-z_]\w*`) at the start of `text`.
pub fn ident_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    match bytes.first() {
        Some(&b) if is_ident_start(b) => {
            1 + bytes[1..].iter().take_while(|&&b| is_word_byte(b)).count()
        }
        _ => 0,
    }
}

/// Length of the ASCII digit run at the start of `text`.
pub fn digits_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Length of the first vocabulary word that starts `text` on a boundary.
fn vocabulary_len(words: &[&str], text: &str) -> usize {
    words
        .iter()
        .find(|word| text.starts_with(**word) && ends_at_boundary(text, word.len()))
        .map_or(0, |word| word.len())
}

/// Length of the type keyword at the start of `text`.
pub fn type_keyword_len(text: &str) -> usize {
    vocabulary_len(TYPE_KEYWORDS, text)
}

/// Length of the selector (`=<digits>` or a named selector) at the start of
/// `text`.
pub fn selector_len(text: &str) -> usize {
    if let Some(after_eq) = text.strip_prefix('=') {
        let digits = digits_len(after_eq);
        return if digits > 0 && ends_at_boundary(after_eq, digits) {
            1 + digits
        } else {
            0
        };
    }
    vocabulary_len(SELECTOR_KEYWORDS, text)
}

/// Length of the style keyword at the start of `text`.
pub fn style_keyword_len(text: &str) -> usize {
    vocabulary_len(STYLE_KEYWORDS, text)
}

/// Probe whether the `{` under `cursor` opens an argument header.
///
/// Matches `{`, optional whitespace, an identifier, optional whitespace,
/// then `,` or `}`. Runs on a copy of the cursor, so nothing is consumed
/// whether or not it matches.
pub fn is_header_open(cursor: Cursor<'_>) -> bool {
    let mut probe = cursor;
    if probe.current() != b'{' {
        return false;
    }
    probe.advance();
    probe.eat_whitespace();
    let name = ident_len(probe.rest());
    if name == 0 {
        return false;
    }
    probe.advance_n(name);
    probe.eat_whitespace();
    matches!(probe.current(), b',' | b'}')
}

/// Returns `true` if the next non-whitespace character in `text` is `{`.
pub fn opens_body_next(text: &str) -> bool {
    text.trim_start().starts_with('{')
}

#[cfg(test)]
mod tests;
