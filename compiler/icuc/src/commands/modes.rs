//! The `modes` command.

use std::fmt::Write;

use icu_highlight::ModeRegistry;

/// One line per mode: name, then its MIME types.
pub fn list_modes(registry: &ModeRegistry) -> String {
    let mut out = String::from("Modes:\n");
    for mode in registry.modes() {
        let mimes = mode.mime_types().join(", ");
        let _ = writeln!(out, "  {:<8}{mimes}", mode.name());
    }
    out
}
