//! Streaming tokenizer for ICU MessageFormat syntax highlighting.
//!
//! Classifies the text of ICU messages (e.g.
//! `{count, plural, one{# item} other{# items}}`) one visual line at a time.
//! State that must survive a line break (brace depth, active argument
//! headers, open quoted literals) lives in a [`ScanState`] owned by the
//! caller and threaded from each line to the next.
//!
//! The tokenizer is total: every input, well-formed or not, is classified
//! without errors, and every scan step makes progress.
//!
//! # Layers
//!
//! - [`Cursor`]: forward-only, non-allocating cursor over one line
//! - [`grammar`]: fixed vocabularies and non-consuming probes
//! - [`next_token`]: the single scan step (quote, brace, header, body rules)
//! - [`LineScanner`] / [`tokenize_line`] / [`tokenize`]: drivers
//!
//! This crate has no workspace dependencies so editors and other
//! highlighters can use it directly.

mod classify;
mod cursor;
pub mod grammar;
mod quote;
mod scanner;
mod state;
mod tag;

pub use cursor::Cursor;
pub use scanner::{next_token, split_lines, tokenize, tokenize_line, LineScanner};
pub use state::ScanState;
pub use tag::{Tag, Token};
