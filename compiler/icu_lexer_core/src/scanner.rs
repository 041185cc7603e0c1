//! Line-at-a-time scanner producing classified tokens.
//!
//! [`next_token`] is the single scan step: it consumes at least one
//! character from a non-empty line and returns the [`Tag`] for the span it
//! consumed, updating the [`ScanState`] in place. [`LineScanner`] drives it
//! over a whole line.
//!
//! # Dispatch
//!
//! First match wins:
//!
//! 1. open quoted literal → quote scanner
//! 2. `'` → quote scanner
//! 3. whitespace run → plain
//! 4. `{` → bracket (header-opening if the header probe matches)
//! 5. `}` → bracket
//! 6. inside braces → header or body classifier
//! 7. top-level text → one character, plain
//!
//! # Resumability
//!
//! Scanning two lines with the state threaded between them produces the
//! same tokens as scanning each line after any earlier line with the same
//! end state. The scanner holds no state other than the cursor position.

use crate::classify::{scan_body, scan_header};
use crate::grammar::is_header_open;
use crate::quote::scan_quote;
use crate::{Cursor, ScanState, Tag, Token};

/// Scan one token, advancing `cursor` and updating `state`.
///
/// At EOF returns [`Tag::Plain`] without consuming anything; callers loop
/// while `!cursor.is_eof()`.
pub fn next_token(cursor: &mut Cursor<'_>, state: &mut ScanState) -> Tag {
    if cursor.is_eof() {
        return Tag::Plain;
    }

    if state.in_quote || cursor.current() == b'\'' {
        return scan_quote(cursor, state);
    }

    if cursor.eat_whitespace() {
        return Tag::Plain;
    }

    match cursor.current() {
        b'{' => {
            let header = is_header_open(*cursor);
            cursor.advance();
            state.open_brace(header);
            Tag::Bracket
        }
        b'}' => {
            cursor.advance();
            state.close_brace();
            Tag::Bracket
        }
        _ if state.is_header() => scan_header(cursor, state),
        _ if state.depth > 0 => scan_body(cursor),
        _ => {
            cursor.advance_char();
            Tag::Plain
        }
    }
}

/// Iterator over the tokens of one line.
///
/// Borrows the caller's state mutably; once the iterator is exhausted the
/// state is the seed for the next line.
pub struct LineScanner<'a, 's> {
    cursor: Cursor<'a>,
    state: &'s mut ScanState,
}

impl<'a, 's> LineScanner<'a, 's> {
    /// Create a scanner over `line`, continuing from `state`.
    pub fn new(line: &'a str, state: &'s mut ScanState) -> Self {
        Self {
            cursor: Cursor::new(line),
            state,
        }
    }

    /// The state as of the last token produced.
    pub fn state(&self) -> &ScanState {
        self.state
    }
}

impl Iterator for LineScanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.cursor.is_eof() {
            return None;
        }
        let start = self.cursor.pos();
        let tag = next_token(&mut self.cursor, self.state);
        let len = self.cursor.pos() - start;
        debug_assert!(len > 0, "scanner made no progress at byte {start}");
        Some(Token::new(tag, start, len))
    }
}

impl std::iter::FusedIterator for LineScanner<'_, '_> {}

/// Scan a whole line, continuing from `state`.
pub fn tokenize_line(line: &str, state: &mut ScanState) -> Vec<Token> {
    LineScanner::new(line, state).collect()
}

/// Scan a multi-line text from a fresh state.
///
/// Lines are split on `\n`; a trailing `\r` is excluded from the line so
/// CRLF text scans like LF text. Returns the tokens of each line and the
/// state after the last line.
pub fn tokenize(text: &str) -> (Vec<Vec<Token>>, ScanState) {
    let mut state = ScanState::new();
    let lines = split_lines(text)
        .map(|line| tokenize_line(line, &mut state))
        .collect();
    (lines, state)
}

/// Split `text` into lines the way [`tokenize`] does.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}
