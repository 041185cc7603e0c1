//! Forward-only cursor over a single line of message text.
//!
//! The cursor advances byte-by-byte through a `&str`, always stopping on
//! UTF-8 character boundaries. EOF is reported as the byte `0x00` from
//! [`current()`](Cursor::current), mirroring a sentinel-terminated buffer:
//! dispatch code can `match` on the current byte without a separate
//! bounds check.
//!
//! # Probes
//!
//! The cursor is [`Copy`]. Lookahead probes (e.g. "is this `{` the start of
//! an argument header?") run on a copy and never move the original, so a
//! failed probe consumes nothing.

/// Forward-only cursor over one line.
///
/// Positions are byte offsets into the line.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The line being scanned (no trailing newline).
    line: &'a str,
    /// Current read position (byte index into `line`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.line.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Returns `true` once every byte of the line has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Extract the text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} is ahead");
        &self.line[start..self.pos]
    }

    /// Advance the cursor by one byte.
    ///
    /// Only valid when the current byte is ASCII.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.current().is_ascii(), "advance() split a character");
        self.pos = (self.pos + 1).min(self.line.len());
    }

    /// Advance the cursor by `n` bytes, clamped to the end of the line.
    ///
    /// `n` must land on a character boundary.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.line.len());
        debug_assert!(
            self.line.is_char_boundary(self.pos),
            "advance_n({n}) split a character"
        );
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Uses the leading byte to determine character width:
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if !self.is_eof() {
            let width = Self::utf8_char_width(self.current());
            self.advance_n(width);
        }
    }

    /// Advance past a run of Unicode whitespace.
    ///
    /// Returns `true` if anything was consumed.
    pub fn eat_whitespace(&mut self) -> bool {
        let start = self.pos;
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !c.is_whitespace())
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        self.pos > start
    }

    /// Advance to the next occurrence of `byte`, leaving the cursor on it.
    ///
    /// Returns `false` (and leaves the cursor unmoved) if `byte` does not
    /// occur in the rest of the line. `byte` must be ASCII.
    pub fn skip_to(&mut self, byte: u8) -> bool {
        debug_assert!(byte.is_ascii(), "skip_to() needle must be ASCII");
        match memchr::memchr(byte, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => false,
        }
    }

    /// Advance to the end of the line.
    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }
}
