//! Command handlers for the `icuhl` CLI.
//!
//! Handlers return their output as a string; the binary prints it. Shared
//! helpers live here in the module root.

use icu_lexer_core::split_lines;

use crate::{CliError, Command};

mod highlight;
mod lex;
mod modes;

pub use highlight::highlight_files;
pub use lex::{lex_file, lex_source};
pub use modes::list_modes;

/// Usage text printed by `icuhl help`.
pub const USAGE: &str = "\
Usage: icuhl [-v|-q] <command> [args]

Commands:
  lex <file> [--json]            Dump the tokens of each line
  highlight <files...> [options] Render files as HTML or ANSI text
  modes                          List registered modes and MIME types
  help                           Show this message

Highlight options:
  --format=<html|ansi>           Output format (default: html)
  --theme=<name>                 base16-light or base16-dark
  --mode=<name>                  Tokenizer mode by name (default: icu)
  --mime=<type>                  Tokenizer mode by MIME type

Global options:
  -v, --verbose                  Log progress (info level)
  -q, --quiet                    Log errors only

Environment:
  ICU_THEME                      Theme when --theme is absent
  ICU_DARK=1                     Prefer base16-dark when no theme is named
  RUST_LOG, ICU_LOG              tracing filter directives
  ICU_LOG_TREE=1                 Hierarchical span output
";

/// Run a parsed command, returning what should go to stdout.
pub fn execute(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Lex { path, json } => lex_file(path, *json),
        Command::Highlight { paths, options } => highlight_files(paths, options),
        Command::Modes => Ok(list_modes(&icu_highlight::ModeRegistry::with_builtin())),
        Command::Help => Ok(USAGE.to_owned()),
    }
}

/// Read a file from disk, classifying common failures.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

/// Lines of a file; a final line terminator does not start another line.
pub(crate) fn file_lines(source: &str) -> Vec<&str> {
    let source = source.strip_suffix('\n').unwrap_or(source);
    split_lines(source).collect()
}

#[cfg(test)]
mod tests;
