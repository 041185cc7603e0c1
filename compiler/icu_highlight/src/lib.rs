//! Editor-facing highlighting on top of `icu_lexer_core`.
//!
//! - [`Mode`] / [`ModeRegistry`]: line tokenizers looked up by name or MIME type
//! - [`HighlightedText`]: per-line token cache with incremental re-highlighting
//! - [`Theme`]: `base16-light` and `base16-dark` palettes
//! - [`render_html`] / [`render_ansi`]: painting a highlighted buffer

mod document;
mod error;
mod mode;
mod render;
mod theme;

pub use document::{HighlightedLine, HighlightedText, StyledSpan};
pub use error::{HighlightError, Result};
pub use mode::{IcuMode, Mode, ModeRegistry, ModeSelector, PlainMode, ICU_MIME, ICU_MODE};
pub use render::{escape_html, render, render_ansi, render_html, OutputFormat};
pub use theme::{Rgb, Style, Theme};

pub use icu_lexer_core::{ScanState, Tag, Token};
