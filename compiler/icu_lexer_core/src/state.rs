//! Scanner state threaded from one line to the next.

use smallvec::SmallVec;

/// Lexical state carried across line boundaries.
///
/// A fresh [`ScanState::default()`] is the state at the start of a document.
/// The caller passes the state produced by line `n` into the scan of line
/// `n + 1`; the scanner never keeps state of its own.
///
/// # Invariant
///
/// `header_depths` is strictly increasing and every entry is `<= depth`.
/// A depth is pushed only when a header-opening `{` is scanned and popped
/// only when the `}` closing that same depth is scanned.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    /// Number of currently open braces.
    pub(crate) depth: u32,
    /// Depths at which an argument header is active, innermost last.
    pub(crate) header_depths: SmallVec<[u32; 4]>,
    /// Depth at which the next identifier is the argument's variable name.
    pub(crate) header_var: Option<u32>,
    /// Inside an unterminated `'...'` literal.
    pub(crate) in_quote: bool,
}

impl ScanState {
    /// The state at the start of a document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently open braces.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Active header depths, innermost last.
    pub fn header_depths(&self) -> &[u32] {
        &self.header_depths
    }

    /// Depth awaiting its variable name, if any.
    pub fn header_var(&self) -> Option<u32> {
        self.header_var
    }

    /// Whether the next line starts inside a quoted literal.
    pub fn in_quote(&self) -> bool {
        self.in_quote
    }

    /// Whether the current depth is an argument header (as opposed to a
    /// message body).
    ///
    /// Derived from the stack top on every call: sibling braces at the same
    /// numeric depth may be a header one moment and a body the next.
    pub fn is_header(&self) -> bool {
        self.depth > 0 && self.header_depths.last() == Some(&self.depth)
    }

    /// Whether the scan is back at top level with nothing open.
    ///
    /// Holds at the end of every well-formed message.
    pub fn is_settled(&self) -> bool {
        self.depth == 0 && self.header_depths.is_empty() && !self.in_quote
    }

    /// Open a brace. Header braces also start awaiting a variable name.
    pub(crate) fn open_brace(&mut self, header: bool) {
        self.depth += 1;
        if header {
            self.header_depths.push(self.depth);
            self.header_var = Some(self.depth);
        }
    }

    /// Close the innermost brace.
    ///
    /// Pops the header stack only if its top is the depth being closed, so a
    /// stray `}` cannot corrupt it. Depth is clamped at zero.
    pub(crate) fn close_brace(&mut self) {
        if self.header_depths.last() == Some(&self.depth) {
            self.header_depths.pop();
            if self.header_var == Some(self.depth) {
                self.header_var = None;
            }
        }
        self.depth = self.depth.saturating_sub(1);
    }

    /// Whether an identifier at the current depth binds the variable name.
    pub(crate) fn awaits_variable(&self) -> bool {
        self.header_var == Some(self.depth)
    }

    pub(crate) fn bind_variable(&mut self) {
        self.header_var = None;
    }
}
