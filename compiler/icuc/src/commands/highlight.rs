//! The `highlight` command: render files as HTML or ANSI text.

use icu_highlight::{escape_html, render, HighlightedText, Mode, ModeRegistry, OutputFormat, Theme};
use rayon::prelude::*;

use super::{file_lines, read_file};
use crate::{CliError, HighlightOptions};

/// Highlight and render every file in `paths`.
///
/// Files are rendered in parallel, each from a fresh scan state; output
/// keeps the order of `paths`. HTML output starts with the theme's
/// stylesheet. With more than one file each rendering is preceded by a
/// header naming the file. The first unreadable file aborts the command.
pub fn highlight_files(paths: &[String], options: &HighlightOptions) -> Result<String, CliError> {
    let registry = ModeRegistry::with_builtin();
    let mode = registry.resolve(&options.mode)?;
    tracing::info!(
        files = paths.len(),
        mode = mode.name(),
        theme = options.theme.name(),
        format = ?options.format,
        "highlighting"
    );

    let rendered = paths
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            Ok(render_source(mode, &source, options.format, &options.theme))
        })
        .collect::<Result<Vec<String>, CliError>>()?;

    let mut out = String::new();
    if options.format == OutputFormat::Html {
        out.push_str("<style>\n");
        out.push_str(&options.theme.stylesheet());
        out.push_str("</style>\n");
    }
    let with_headers = paths.len() > 1;
    for (path, document) in paths.iter().zip(rendered) {
        if with_headers {
            out.push_str(&file_header(path, options.format));
        }
        out.push_str(&document);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}

fn render_source(mode: &dyn Mode, source: &str, format: OutputFormat, theme: &Theme) -> String {
    let lines = file_lines(source);
    let text = HighlightedText::from_lines(mode, &lines);
    render(format, &text, &lines, theme)
}

pub(super) fn file_header(path: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => {
            let mut header = String::from("<h2 class=\"file\">");
            escape_html(path, &mut header);
            header.push_str("</h2>\n");
            header
        }
        OutputFormat::Ansi => format!("==> {path} <==\n"),
    }
}
