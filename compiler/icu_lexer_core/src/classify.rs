//! Classification inside braces.
//!
//! Headers and bodies use disjoint grammars. A header (the part of a
//! placeholder before its first body brace) is structured: variable name,
//! commas, type, selector and style vocabularies. A body is free message
//! text where only `#`, digit runs and nested braces mean anything.

use crate::grammar::{
    digits_len, ident_len, opens_body_next, selector_len, style_keyword_len, type_keyword_len,
};
use crate::{Cursor, ScanState, Tag};

/// Classify one token in argument-header position.
pub(crate) fn scan_header(cursor: &mut Cursor<'_>, state: &mut ScanState) -> Tag {
    let rest = cursor.rest();

    if state.awaits_variable() {
        let len = ident_len(rest);
        if len > 0 {
            cursor.advance_n(len);
            state.bind_variable();
            return Tag::Variable;
        }
    }

    if cursor.current() == b',' {
        cursor.advance();
        return Tag::Operator;
    }

    let len = type_keyword_len(rest);
    if len > 0 {
        cursor.advance_n(len);
        return Tag::Keyword;
    }

    let len = selector_len(rest);
    if len > 0 {
        cursor.advance_n(len);
        return Tag::Atom;
    }

    let len = style_keyword_len(rest);
    if len > 0 {
        cursor.advance_n(len);
        return Tag::Keyword;
    }

    // Any other identifier directly followed by a body is a custom option
    // name (e.g. `select` cases); otherwise it is stray header text.
    let len = ident_len(rest);
    if len > 0 {
        cursor.advance_n(len);
        return if opens_body_next(cursor.rest()) {
            Tag::Atom
        } else {
            Tag::Plain
        };
    }

    cursor.advance_char();
    Tag::Plain
}

/// Classify one token in message-body position.
pub(crate) fn scan_body(cursor: &mut Cursor<'_>) -> Tag {
    if cursor.current() == b'#' {
        cursor.advance();
        return Tag::Atom;
    }

    let len = digits_len(cursor.rest());
    if len > 0 {
        cursor.advance_n(len);
        return Tag::Number;
    }

    cursor.advance_char();
    Tag::Plain
}
