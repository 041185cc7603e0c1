//! Command-line configuration.
//!
//! Arguments are matched by hand: global `-v`/`-q` flags may appear
//! anywhere, the first remaining argument names the command, and each
//! command accepts its own `--option=value` flags. Highlight settings fall
//! back to the environment when not given on the command line.

use icu_highlight::{ModeSelector, OutputFormat, Theme};

use crate::CliError;

/// Theme name used when `--theme` is absent.
pub const THEME_ENV: &str = "ICU_THEME";
/// Set to `1` to prefer the dark theme when no theme is named.
pub const DARK_ENV: &str = "ICU_DARK";

/// How much the CLI logs when no filter is set in the environment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Default `tracing` filter directive for this level.
    pub fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
        }
    }
}

/// Settings for `icuhl highlight`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    pub format: OutputFormat,
    pub theme: Theme,
    pub mode: ModeSelector,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex { path: String, json: bool },
    Highlight { paths: Vec<String>, options: HighlightOptions },
    Modes,
    Help,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub verbosity: Verbosity,
}

impl CliConfig {
    /// Parse arguments (without the program name), reading fallbacks from
    /// the process environment.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_args_with_env(args, |key| std::env::var(key).ok())
    }

    /// Parse arguments with an explicit environment lookup.
    pub fn from_args_with_env<I, F>(args: I, env: F) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut verbosity = Verbosity::default();
        let mut rest = Vec::new();
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => verbosity = Verbosity::Verbose,
                "-q" | "--quiet" => verbosity = Verbosity::Quiet,
                _ => rest.push(arg),
            }
        }

        let Some((name, options)) = rest.split_first() else {
            return Ok(Self {
                command: Command::Help,
                verbosity,
            });
        };

        let command = match name.as_str() {
            "lex" => parse_lex(options)?,
            "highlight" => parse_highlight(options, &env)?,
            "modes" => {
                if let Some(arg) = options.first() {
                    return Err(CliError::usage(format!("unexpected argument '{arg}'")));
                }
                Command::Modes
            }
            "help" | "--help" | "-h" => Command::Help,
            other => return Err(CliError::usage(format!("unknown command '{other}'"))),
        };

        Ok(Self { command, verbosity })
    }
}

fn parse_lex(options: &[String]) -> Result<Command, CliError> {
    let mut json = false;
    let mut path = None;
    for arg in options {
        if arg == "--json" {
            json = true;
        } else if arg.starts_with('-') {
            return Err(unknown_option("lex", arg));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(CliError::usage(format!("unexpected argument '{arg}'")));
        }
    }
    let Some(path) = path else {
        let message = "missing file path (usage: icuhl lex <file> [--json])";
        return Err(CliError::usage(message));
    };
    Ok(Command::Lex { path, json })
}

fn parse_highlight<F>(options: &[String], env: &F) -> Result<Command, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut paths = Vec::new();
    let mut format = OutputFormat::default();
    let mut theme_name = None;
    let mut mode = None;

    for arg in options {
        if let Some(value) = arg.strip_prefix("--format=") {
            format = value.parse()?;
        } else if let Some(value) = arg.strip_prefix("--theme=") {
            theme_name = Some(value.to_owned());
        } else if let Some(value) = arg.strip_prefix("--mode=") {
            set_mode(&mut mode, ModeSelector::Name(value.to_owned()))?;
        } else if let Some(value) = arg.strip_prefix("--mime=") {
            set_mode(&mut mode, ModeSelector::Mime(value.to_owned()))?;
        } else if arg.starts_with('-') {
            return Err(unknown_option("highlight", arg));
        } else {
            paths.push(arg.clone());
        }
    }

    if paths.is_empty() {
        return Err(CliError::usage(
            "missing file path (usage: icuhl highlight <files...> [options])",
        ));
    }

    Ok(Command::Highlight {
        paths,
        options: HighlightOptions {
            format,
            theme: resolve_theme(theme_name, env)?,
            mode: mode.unwrap_or_default(),
        },
    })
}

fn set_mode(slot: &mut Option<ModeSelector>, selector: ModeSelector) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(CliError::usage(
            "--mode and --mime may be given at most once, and not together",
        ));
    }
    *slot = Some(selector);
    Ok(())
}

/// `--theme`, then `ICU_THEME`, then the `ICU_DARK` preference.
fn resolve_theme<F>(explicit: Option<String>, env: &F) -> Result<Theme, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let named = explicit.or_else(|| env(THEME_ENV).filter(|name| !name.is_empty()));
    if let Some(name) = named {
        return Ok(Theme::from_name(&name)?);
    }
    let prefers_dark = env(DARK_ENV).is_some_and(|value| value == "1");
    Ok(Theme::for_preference(prefers_dark))
}

fn unknown_option(command: &str, arg: &str) -> CliError {
    CliError::usage(format!("unknown option '{arg}' for '{command}'"))
}
