//! Painting highlighted lines as HTML or ANSI-colored text.

use std::fmt::Write;
use std::str::FromStr;

use crate::{HighlightError, HighlightedText, Theme};

/// Output format of a rendered document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Html,
    Ansi,
}

impl FromStr for OutputFormat {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "ansi" => Ok(Self::Ansi),
            _ => Err(HighlightError::UnknownFormat { name: s.to_owned() }),
        }
    }
}

/// Render in the given format.
///
/// `lines` must be the lines `text` was highlighted from.
pub fn render(
    format: OutputFormat,
    text: &HighlightedText,
    lines: &[&str],
    theme: &Theme,
) -> String {
    match format {
        OutputFormat::Html => render_html(text, lines, theme),
        OutputFormat::Ansi => render_ansi(text, lines, theme),
    }
}

/// Render as an HTML `<pre>` block, one `<div class="line">` per line.
///
/// Tagged spans become `<span class="cm-…">`; untagged text is emitted
/// escaped without a wrapper. Pair with [`Theme::stylesheet`].
pub fn render_html(text: &HighlightedText, lines: &[&str], theme: &Theme) -> String {
    let mut out = format!("<pre class=\"cm-s-{}\">", theme.name());
    for (index, line) in lines.iter().enumerate() {
        out.push_str("<div class=\"line\">");
        for span in text.spans(index) {
            let Some(segment) = line.get(span.range.clone()) else {
                tracing::warn!(index, ?span, "span outside line, highlighting is stale");
                continue;
            };
            match Theme::css_class(span.tag) {
                Some(class) => {
                    let _ = write!(out, "<span class=\"{class}\">");
                    escape_html(segment, &mut out);
                    out.push_str("</span>");
                }
                None => escape_html(segment, &mut out),
            }
        }
        out.push_str("</div>\n");
    }
    out.push_str("</pre>\n");
    out
}

/// Render with 24-bit ANSI escape sequences, lines joined by `\n`.
pub fn render_ansi(text: &HighlightedText, lines: &[&str], theme: &Theme) -> String {
    let mut out = String::new();
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for span in text.spans(index) {
            let Some(segment) = line.get(span.range.clone()) else {
                tracing::warn!(index, ?span, "span outside line, highlighting is stale");
                continue;
            };
            let style = theme.style_for(span.tag);
            if style.is_plain() {
                out.push_str(segment);
                continue;
            }
            if style.bold {
                out.push_str("\x1b[1m");
            }
            if let Some(fg) = style.fg {
                let _ = write!(out, "\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2);
            }
            out.push_str(segment);
            out.push_str("\x1b[0m");
        }
    }
    out
}

/// Append `text` to `out` with HTML special characters escaped.
pub fn escape_html(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
