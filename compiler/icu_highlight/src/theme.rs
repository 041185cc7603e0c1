//! Light and dark color themes.
//!
//! The editor switches between `base16-light` and `base16-dark` following
//! the system color-scheme preference. Each theme maps every [`Tag`] to a
//! [`Style`]; renderers use CSS classes (`cm-<tag>`) for HTML output and the
//! RGB colors for terminal output.

use std::fmt::Write;

use icu_lexer_core::Tag;

use crate::{HighlightError, Result};

/// 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS hex notation (`#rrggbb`).
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Visual style for one tag. An empty style inherits the editor defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bold: bool,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Whether the style changes nothing.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && !self.bold
    }
}

/// A named color theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    name: &'static str,
    dark: bool,
    background: Rgb,
    foreground: Rgb,
    /// Indexed by `Tag as usize`.
    styles: [Style; Tag::ALL.len()],
}

impl Theme {
    pub const LIGHT: &'static str = "base16-light";
    pub const DARK: &'static str = "base16-dark";

    /// Light base16 palette.
    pub fn base16_light() -> Self {
        let fg = Rgb(0x20, 0x20, 0x20);
        Self::base16(Self::LIGHT, false, Rgb(0xf5, 0xf5, 0xf5), fg)
    }

    /// Dark base16 palette.
    pub fn base16_dark() -> Self {
        let fg = Rgb(0xe0, 0xe0, 0xe0);
        Self::base16(Self::DARK, true, Rgb(0x15, 0x15, 0x15), fg)
    }

    /// Accent colors are shared; brackets use the foreground of the variant.
    fn base16(name: &'static str, dark: bool, background: Rgb, foreground: Rgb) -> Self {
        let red = Rgb(0xac, 0x41, 0x42);
        let orange = Rgb(0xd2, 0x84, 0x45);
        let yellow = Rgb(0xf4, 0xbf, 0x75);
        let green = Rgb(0x90, 0xa9, 0x59);
        let blue = Rgb(0x6a, 0x9f, 0xb5);
        let purple = Rgb(0xaa, 0x75, 0x9f);

        let mut styles = [Style::new(); Tag::ALL.len()];
        styles[Tag::Bracket as usize] = Style::new().fg(foreground).bold();
        styles[Tag::String as usize] = Style::new().fg(yellow);
        styles[Tag::Variable as usize] = Style::new().fg(green);
        styles[Tag::Operator as usize] = Style::new().fg(blue);
        styles[Tag::Keyword as usize] = Style::new().fg(red);
        styles[Tag::Atom as usize] = Style::new().fg(purple);
        styles[Tag::Number as usize] = Style::new().fg(orange);

        Self {
            name,
            dark,
            background,
            foreground,
            styles,
        }
    }

    /// Theme matching a dark or light color-scheme preference.
    pub fn for_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::base16_dark()
        } else {
            Self::base16_light()
        }
    }

    /// Theme by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            Self::LIGHT => Ok(Self::base16_light()),
            Self::DARK => Ok(Self::base16_dark()),
            _ => Err(HighlightError::UnknownTheme {
                name: name.to_owned(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn foreground(&self) -> Rgb {
        self.foreground
    }

    /// Style for a tag.
    pub fn style_for(&self, tag: Tag) -> Style {
        self.styles[tag as usize]
    }

    /// CSS class for a tag, or `None` for untagged text.
    pub fn css_class(tag: Tag) -> Option<&'static str> {
        match tag {
            Tag::Bracket => Some("cm-bracket"),
            Tag::String => Some("cm-string"),
            Tag::Variable => Some("cm-variable"),
            Tag::Operator => Some("cm-operator"),
            Tag::Keyword => Some("cm-keyword"),
            Tag::Atom => Some("cm-atom"),
            Tag::Number => Some("cm-number"),
            Tag::Plain => None,
        }
    }

    /// Stylesheet scoped to `.cm-s-<name>`.
    pub fn stylesheet(&self) -> String {
        let scope = format!(".cm-s-{}", self.name);
        let mut css = format!(
            "{scope} {{ background: {}; color: {}; }}\n",
            self.background.hex(),
            self.foreground.hex()
        );
        for tag in Tag::ALL {
            let (Some(class), style) = (Self::css_class(tag), self.style_for(tag)) else {
                continue;
            };
            if style.is_plain() {
                continue;
            }
            let _ = write!(css, "{scope} span.{class} {{");
            if let Some(fg) = style.fg {
                let _ = write!(css, " color: {};", fg.hex());
            }
            if style.bold {
                css.push_str(" font-weight: bold;");
            }
            css.push_str(" }\n");
        }
        css
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::base16_light()
    }
}

#[cfg(test)]
mod tests;
