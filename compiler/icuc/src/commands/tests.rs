#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write as _;

use super::*;
use crate::HighlightOptions;
use icu_highlight::{ModeSelector, OutputFormat, Theme};
use pretty_assertions::assert_eq;

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn path_of(file: &tempfile::NamedTempFile) -> String {
    file.path().to_str().unwrap().to_owned()
}

#[test]
fn trailing_newline_is_not_a_line() {
    assert_eq!(file_lines("a\nb\n"), ["a", "b"]);
    assert_eq!(file_lines("a\r\nb\r\n"), ["a", "b"]);
    assert_eq!(file_lines("a\n\n"), ["a", ""]);
    assert_eq!(file_lines(""), [""]);
}

#[test]
fn lex_text_output() {
    let out = lex_source("m.icu", "{n}\n", false).unwrap();
    assert_eq!(
        out,
        "Tokens for 'm.icu' (3 tokens):\n\
         \x20 1:0..1 bracket \"{\"\n\
         \x20 1:1..2 variable \"n\"\n\
         \x20 1:2..3 bracket \"}\"\n"
    );
}

#[test]
fn lex_reports_unterminated_input() {
    let out = lex_source("m.icu", "{n, plural,", false).unwrap();
    assert!(out.contains("(unterminated at end of file:"));
}

#[test]
fn lex_json_output() {
    let out = lex_source("m.icu", "a {n}\nb", true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["path"], "m.icu");
    assert_eq!(value["settled"], true);
    assert_eq!(value["lines"].as_array().unwrap().len(), 2);
    assert_eq!(value["lines"][0]["tokens"][2]["tag"], "bracket");
    assert_eq!(value["lines"][0]["tokens"][3]["tag"], "variable");
    assert_eq!(value["lines"][0]["tokens"][3]["start"], 3);
    assert_eq!(value["lines"][0]["tokens"][3]["end"], 4);
    assert_eq!(value["lines"][1]["line"], 2);
    assert_eq!(value["lines"][1]["tokens"][0]["text"], "b");
}

#[test]
fn lex_missing_file() {
    let err = lex_file("/nonexistent/dir/messages.icu", false).unwrap_err();
    assert!(matches!(err, CliError::FileNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "cannot find file '/nonexistent/dir/messages.icu'"
    );
}

#[test]
fn highlight_single_html_file() {
    let file = temp_file("Hi {name}!\n");
    let out = highlight_files(&[path_of(&file)], &HighlightOptions::default()).unwrap();
    assert!(out.starts_with("<style>\n.cm-s-base16-light {"));
    assert!(out.contains("<span class=\"cm-variable\">name</span>"));
    assert_eq!(out.matches("<div class=\"line\">").count(), 1);
    assert!(!out.contains("<h2"));
}

#[test]
fn highlight_many_files_keeps_order() {
    let files: Vec<_> = (0..8).map(|i| temp_file(&format!("{{v{i}}}"))).collect();
    let paths: Vec<String> = files.iter().map(path_of).collect();
    let options = HighlightOptions {
        format: OutputFormat::Ansi,
        theme: Theme::base16_dark(),
        mode: ModeSelector::default(),
    };
    let out = highlight_files(&paths, &options).unwrap();

    let mut last = 0;
    for (i, path) in paths.iter().enumerate() {
        let at = out.find(&format!("==> {path} <==")).unwrap();
        assert!(at >= last);
        assert!(out[at..].contains(&format!("v{i}")));
        last = at;
    }
}

#[test]
fn highlight_each_file_starts_fresh() {
    // An unterminated quote in one file must not leak into the next.
    let open = temp_file("it's open");
    let next = temp_file("{n}");
    let options = HighlightOptions {
        format: OutputFormat::Html,
        ..HighlightOptions::default()
    };
    let out = highlight_files(&[path_of(&open), path_of(&next)], &options).unwrap();
    assert!(out.contains("<span class=\"cm-variable\">n</span>"));
}

#[test]
fn highlight_plain_mode_by_mime() {
    let file = temp_file("{n}");
    let options = HighlightOptions {
        mode: ModeSelector::Mime("text/plain".to_owned()),
        ..HighlightOptions::default()
    };
    let out = highlight_files(&[path_of(&file)], &options).unwrap();
    assert!(out.contains("<div class=\"line\">{n}</div>"));
}

#[test]
fn highlight_unknown_mode_fails() {
    let file = temp_file("{n}");
    let options = HighlightOptions {
        mode: ModeSelector::Name("yaml".to_owned()),
        ..HighlightOptions::default()
    };
    let err = highlight_files(&[path_of(&file)], &options).unwrap_err();
    assert_eq!(err.to_string(), "unknown mode 'yaml'");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn highlight_missing_file_fails() {
    let file = temp_file("{n}");
    let paths = [path_of(&file), "/nonexistent/x.icu".to_owned()];
    let err = highlight_files(&paths, &HighlightOptions::default()).unwrap_err();
    assert!(matches!(err, CliError::FileNotFound { .. }));
}

#[test]
fn modes_lists_builtins() {
    assert_eq!(
        list_modes(&icu_highlight::ModeRegistry::with_builtin()),
        "Modes:\n  icu     text/x-icu\n  plain   text/plain\n"
    );
}

#[test]
fn file_header_escapes_path_in_html() {
    assert_eq!(
        highlight::file_header("a<b>&'c\".icu", OutputFormat::Html),
        "<h2 class=\"file\">a&lt;b&gt;&amp;&#39;c&quot;.icu</h2>\n"
    );
    assert_eq!(
        highlight::file_header("a<b>.icu", OutputFormat::Ansi),
        "==> a<b>.icu <==\n"
    );
}

#[test]
fn help_prints_usage() {
    assert_eq!(execute(&Command::Help).unwrap(), USAGE);
    assert!(execute(&Command::Modes).unwrap().contains("text/x-icu"));
}
