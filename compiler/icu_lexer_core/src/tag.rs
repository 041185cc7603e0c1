//! Classification tags and the tokens that carry them.
//!
//! The tag set is closed: every span the scanner consumes is assigned exactly
//! one of these eight categories. Renderers map tags to visual styles;
//! [`Tag::Plain`] is the untagged category and carries no style name.

/// Coloring category for a scanned span.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `{` or `}`.
    Bracket = 0,
    /// Quoted literal text, including the quotes, and `''`.
    String = 1,
    /// The argument name bound by a header (`count` in `{count, plural, ...}`).
    Variable = 2,
    /// `,` inside a header.
    Operator = 3,
    /// Type keywords (`plural`, `date`, ...) and style keywords (`short`, ...).
    Keyword = 4,
    /// Selectors, option names and the `#` substitution marker.
    Atom = 5,
    /// Digit runs inside a message body.
    Number = 6,
    /// Everything else: whitespace, free text, unrecognized header text.
    Plain = 7,
}

impl Tag {
    /// Every tag, in discriminant order.
    pub const ALL: [Tag; 8] = [
        Tag::Bracket,
        Tag::String,
        Tag::Variable,
        Tag::Operator,
        Tag::Keyword,
        Tag::Atom,
        Tag::Number,
        Tag::Plain,
    ];

    /// Stable lowercase name of the tag (`"plain"` for [`Tag::Plain`]).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bracket => "bracket",
            Self::String => "string",
            Self::Variable => "variable",
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::Atom => "atom",
            Self::Number => "number",
            Self::Plain => "plain",
        }
    }

    /// Style name a renderer should use, or `None` for untagged text.
    pub const fn style_name(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            _ => Some(self.name()),
        }
    }

    /// Parse a tag from its [`name()`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}

/// A classified span of one line.
///
/// `start` and `len` are byte offsets into the line the token was scanned
/// from. Tokens produced by the scanner are never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: Tag,
    pub start: usize,
    pub len: usize,
}

impl Token {
    pub fn new(tag: Tag, start: usize, len: usize) -> Self {
        Self { tag, start, len }
    }

    /// Byte offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Byte range of the token within its line.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end()
    }

    /// Extract the token's text from the line it was scanned from.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.range()]
    }
}
