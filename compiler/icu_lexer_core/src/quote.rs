//! ICU apostrophe quoting.
//!
//! - `''` anywhere is a literal apostrophe: one two-byte string token, quote
//!   state untouched.
//! - A lone `'` opens a quoted literal and is itself a string token.
//! - Inside a literal, everything up to and including the next `'` is one
//!   string token; the closing `'` leaves quote mode.
//! - A literal left open at the end of a line stays open: the rest of the
//!   line is string and `in_quote` carries over to the next line.

use crate::{Cursor, ScanState, Tag};

/// Scan quote syntax under the cursor.
///
/// Called when `state.in_quote` is set or the current byte is `'`. Always
/// consumes at least one byte of a non-empty remainder.
pub(crate) fn scan_quote(cursor: &mut Cursor<'_>, state: &mut ScanState) -> Tag {
    if state.in_quote {
        if cursor.skip_to(b'\'') {
            cursor.advance();
            state.in_quote = false;
        } else {
            cursor.skip_to_end();
        }
        return Tag::String;
    }

    debug_assert_eq!(cursor.current(), b'\'', "scan_quote() outside a quote");
    cursor.advance();
    if cursor.current() == b'\'' {
        cursor.advance();
    } else {
        state.in_quote = true;
    }
    Tag::String
}

#[cfg(test)]
mod tests;
