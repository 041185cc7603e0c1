//! The `lex` command: dump per-line tokens.

use std::fmt::Write;

use icu_lexer_core::{tokenize_line, ScanState};
use serde::Serialize;

use super::{file_lines, read_file};
use crate::CliError;

#[derive(Serialize)]
struct LexReport<'a> {
    path: &'a str,
    lines: Vec<LexLine<'a>>,
    /// No braces or quoted literal left open at the end of the file.
    settled: bool,
}

#[derive(Serialize)]
struct LexLine<'a> {
    line: usize,
    tokens: Vec<LexToken<'a>>,
}

#[derive(Serialize)]
struct LexToken<'a> {
    tag: &'static str,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Lex a file and format its tokens.
pub fn lex_file(path: &str, json: bool) -> Result<String, CliError> {
    let source = read_file(path)?;
    lex_source(path, &source, json)
}

/// Lex `source` and format its tokens, as text or as pretty JSON.
///
/// Line numbers are 1-based; token offsets are byte offsets into the line.
pub fn lex_source(path: &str, source: &str, json: bool) -> Result<String, CliError> {
    let mut state = ScanState::new();
    let lines: Vec<LexLine<'_>> = file_lines(source)
        .into_iter()
        .enumerate()
        .map(|(index, line)| LexLine {
            line: index + 1,
            tokens: tokenize_line(line, &mut state)
                .into_iter()
                .map(|token| LexToken {
                    tag: token.tag.name(),
                    start: token.start,
                    end: token.end(),
                    text: token.text(line),
                })
                .collect(),
        })
        .collect();
    let report = LexReport {
        path,
        lines,
        settled: state.is_settled(),
    };
    tracing::info!(
        path,
        lines = report.lines.len(),
        settled = report.settled,
        "lexed"
    );

    if json {
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        return Ok(out);
    }

    let count: usize = report.lines.iter().map(|line| line.tokens.len()).sum();
    let mut out = format!("Tokens for '{path}' ({count} tokens):\n");
    for line in &report.lines {
        for token in &line.tokens {
            let _ = writeln!(
                out,
                "  {}:{}..{} {} {:?}",
                line.line, token.start, token.end, token.tag, token.text
            );
        }
    }
    if !report.settled {
        let _ = writeln!(out, "  (unterminated at end of file: {state:?})");
    }
    Ok(out)
}
