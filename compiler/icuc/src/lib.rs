//! `icuhl`: command-line highlighter for ICU MessageFormat files.
//!
//! The binary is a thin wrapper: [`CliConfig`] parses the command line,
//! [`init_tracing`] installs logging, and [`commands::execute`] produces the
//! output.

pub mod commands;
mod config;
mod error;
mod tracing_setup;

pub use config::{CliConfig, Command, HighlightOptions, Verbosity, DARK_ENV, THEME_ENV};
pub use error::CliError;
pub use tracing_setup::init_tracing;
