//! Cached per-line highlighting for a text buffer.
//!
//! Each line keeps its tokens and the [`ScanState`] at its end. After an
//! edit only the edited line is rescanned, and rescanning continues
//! downstream only while the end-of-line state differs from the cached one:
//! once states converge, later lines cannot change.

use std::ops::Range;

use icu_lexer_core::{split_lines, ScanState, Tag, Token};

use crate::Mode;

/// Tokens of one line plus the state it hands to the next line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightedLine {
    pub tokens: Vec<Token>,
    pub state_after: ScanState,
}

/// A run of same-tag text, ready to paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    pub tag: Tag,
    pub range: Range<usize>,
}

/// Cached highlighting for a multi-line buffer.
#[derive(Clone, Debug, Default)]
pub struct HighlightedText {
    lines: Vec<HighlightedLine>,
}

impl HighlightedText {
    /// Highlight a whole buffer from scratch.
    ///
    /// Lines are split on `\n`, with a trailing `\r` dropped from each line.
    pub fn from_text(mode: &dyn Mode, text: &str) -> Self {
        let lines: Vec<&str> = split_lines(text).collect();
        Self::from_lines(mode, &lines)
    }

    /// Highlight an explicit slice of lines.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(mode = mode.name(), lines = lines.len())
    )]
    pub fn from_lines(mode: &dyn Mode, lines: &[&str]) -> Self {
        let mut state = mode.start_state();
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            let tokens = mode.tokenize_line(line, &mut state);
            debug_assert!(covers_line(line, &tokens), "tokens must tile {line:?}");
            out.push(HighlightedLine {
                tokens,
                state_after: state.clone(),
            });
        }
        if !state.is_settled() {
            tracing::debug!(?state, "buffer ends with open braces or quote");
        }
        Self { lines: out }
    }

    /// Highlighted lines.
    pub fn lines(&self) -> &[HighlightedLine] {
        &self.lines
    }

    /// State after the last line (the start state for an empty buffer).
    pub fn final_state(&self) -> ScanState {
        self.lines
            .last()
            .map(|line| line.state_after.clone())
            .unwrap_or_default()
    }

    /// Tokens on a line that overlap the given byte range.
    pub fn tokens_in_range(&self, line_index: usize, range: Range<usize>) -> Vec<&Token> {
        let Some(line) = self.lines.get(line_index) else {
            return Vec::new();
        };
        line.tokens
            .iter()
            .filter(|token| token.start < range.end && token.end() > range.start)
            .collect()
    }

    /// Adjacent same-tag tokens of a line merged into paintable spans.
    pub fn spans(&self, line_index: usize) -> Vec<StyledSpan> {
        let Some(line) = self.lines.get(line_index) else {
            return Vec::new();
        };
        let mut spans: Vec<StyledSpan> = Vec::with_capacity(line.tokens.len());
        for token in &line.tokens {
            match spans.last_mut() {
                Some(last) if last.tag == token.tag && last.range.end == token.start => {
                    last.range.end = token.end();
                }
                _ => spans.push(StyledSpan {
                    tag: token.tag,
                    range: token.range(),
                }),
            }
        }
        spans
    }

    /// Rescan after `lines[line_index]` was edited in place.
    ///
    /// Returns the number of lines rescanned. If the line count changed the
    /// whole buffer is rescanned.
    pub fn update_line(&mut self, mode: &dyn Mode, lines: &[&str], line_index: usize) -> usize {
        if line_index >= lines.len() {
            return 0;
        }

        if self.lines.len() != lines.len() {
            tracing::debug!(
                cached = self.lines.len(),
                current = lines.len(),
                "line count changed, rescanning buffer"
            );
            *self = Self::from_lines(mode, lines);
            return lines.len();
        }

        let mut state = if line_index == 0 {
            mode.start_state()
        } else {
            self.lines[line_index - 1].state_after.clone()
        };

        let mut rescanned = 0;
        for (cached, line) in self.lines[line_index..]
            .iter_mut()
            .zip(&lines[line_index..])
        {
            let tokens = mode.tokenize_line(line, &mut state);
            debug_assert!(covers_line(line, &tokens), "tokens must tile {line:?}");
            rescanned += 1;

            let converged = cached.state_after == state;
            tracing::trace!(?state, converged, "rescanned line");
            cached.tokens = tokens;
            if converged {
                break;
            }
            cached.state_after = state.clone();
        }

        tracing::debug!(line_index, rescanned, "incremental rescan");
        rescanned
    }
}

/// Whether `tokens` are non-empty, contiguous and cover `line` exactly.
fn covers_line(line: &str, tokens: &[Token]) -> bool {
    let mut pos = 0;
    for token in tokens {
        if token.start != pos || token.len == 0 {
            return false;
        }
        pos = token.end();
    }
    pos == line.len()
}
