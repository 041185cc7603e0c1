//! Named tokenizer modes and the registry that resolves them.
//!
//! An editor picks a mode either by name (`icu`) or by the MIME type of the
//! content it is editing (`text/x-icu`). Later registrations under the same
//! name replace earlier ones.

use std::sync::Arc;

use icu_lexer_core::{tokenize_line, ScanState, Tag, Token};
use rustc_hash::FxHashMap;

use crate::{HighlightError, Result};

/// Mode name of the ICU MessageFormat tokenizer.
pub const ICU_MODE: &str = "icu";
/// MIME type of ICU MessageFormat content.
pub const ICU_MIME: &str = "text/x-icu";

/// A line tokenizer an editor can select.
///
/// Implementors produce tokens for a single line given the state left by
/// the previous line, updating the state in place.
pub trait Mode: Send + Sync {
    /// Registry name (e.g. `"icu"`).
    fn name(&self) -> &'static str;

    /// MIME types this mode handles.
    fn mime_types(&self) -> &'static [&'static str];

    /// State at the start of a document.
    fn start_state(&self) -> ScanState {
        ScanState::new()
    }

    /// Tokenize one line. Token offsets are relative to `line`.
    fn tokenize_line(&self, line: &str, state: &mut ScanState) -> Vec<Token>;
}

/// The ICU MessageFormat mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcuMode;

impl Mode for IcuMode {
    fn name(&self) -> &'static str {
        ICU_MODE
    }

    fn mime_types(&self) -> &'static [&'static str] {
        &[ICU_MIME]
    }

    fn tokenize_line(&self, line: &str, state: &mut ScanState) -> Vec<Token> {
        tokenize_line(line, state)
    }
}

/// Fallback mode: the whole line is one plain token.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainMode;

impl Mode for PlainMode {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn mime_types(&self) -> &'static [&'static str] {
        &["text/plain"]
    }

    fn tokenize_line(&self, line: &str, _state: &mut ScanState) -> Vec<Token> {
        if line.is_empty() {
            Vec::new()
        } else {
            vec![Token::new(Tag::Plain, 0, line.len())]
        }
    }
}

/// How a caller asks for a mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModeSelector {
    Name(String),
    Mime(String),
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::Name(ICU_MODE.to_owned())
    }
}

/// Registry for looking up modes by name or MIME type.
#[derive(Default)]
pub struct ModeRegistry {
    modes: Vec<Arc<dyn Mode>>,
    by_name: FxHashMap<String, usize>,
    by_mime: FxHashMap<String, usize>,
}

impl ModeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the `icu` and `plain` modes.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(IcuMode));
        registry.register(Arc::new(PlainMode));
        registry
    }

    /// Register a mode, replacing any mode of the same name.
    ///
    /// MIME types of the new mode take over from whichever mode previously
    /// claimed them.
    pub fn register(&mut self, mode: Arc<dyn Mode>) {
        let name = mode.name().to_ascii_lowercase();
        let index = if let Some(&existing) = self.by_name.get(&name) {
            self.by_mime.retain(|_, idx| *idx != existing);
            self.modes[existing] = mode;
            existing
        } else {
            self.modes.push(mode);
            self.modes.len() - 1
        };
        tracing::debug!(mode = %name, index, "registered mode");
        self.by_name.insert(name, index);
        for mime in self.modes[index].mime_types() {
            self.by_mime.insert(normalize_mime(mime), index);
        }
    }

    /// Look up a mode by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&dyn Mode> {
        let index = self.by_name.get(&name.to_ascii_lowercase())?;
        self.modes.get(*index).map(AsRef::as_ref)
    }

    /// Look up a mode by MIME type.
    ///
    /// Case-insensitive; parameters such as `; charset=utf-8` are ignored.
    pub fn for_mime(&self, mime: &str) -> Option<&dyn Mode> {
        let index = self.by_mime.get(&normalize_mime(mime))?;
        self.modes.get(*index).map(AsRef::as_ref)
    }

    /// Resolve a selector, failing with a descriptive error.
    pub fn resolve(&self, selector: &ModeSelector) -> Result<&dyn Mode> {
        let found = match selector {
            ModeSelector::Name(name) => self
                .get(name)
                .ok_or_else(|| HighlightError::UnknownMode { name: name.clone() }),
            ModeSelector::Mime(mime) => self
                .for_mime(mime)
                .ok_or_else(|| HighlightError::UnknownMime { mime: mime.clone() }),
        };
        match &found {
            Ok(mode) => tracing::debug!(?selector, mode = mode.name(), "resolved mode"),
            Err(e) => tracing::debug!(?selector, "mode lookup failed: {e}"),
        }
        found
    }

    /// Registered modes, in registration order.
    pub fn modes(&self) -> impl Iterator<Item = &dyn Mode> {
        self.modes.iter().map(AsRef::as_ref)
    }

    /// Number of registered modes.
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

/// Lowercase a MIME type and drop its parameters.
fn normalize_mime(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
