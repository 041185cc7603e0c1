//! ICU MessageFormat highlighter CLI.

use icuc::commands::{execute, USAGE};
use icuc::{init_tracing, CliConfig};

fn main() {
    let config = match CliConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_usage() {
                eprintln!();
                eprint!("{USAGE}");
            }
            std::process::exit(e.exit_code());
        }
    };

    init_tracing(config.verbosity);
    tracing::debug!(?config, "parsed command line");

    match execute(&config.command) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
