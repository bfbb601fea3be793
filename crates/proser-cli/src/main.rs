//! # Proser CLI
//!
//! Scaffolds AI-agent instruction files into an existing project.
//!
//! ## Startup sequence
//!
//! 1. Read `.env` into the environment, if present.
//! 2. Parse arguments; `--help` and `--version` exit here.
//! 3. Install the tracing subscriber and warn about a malformed `.env`.
//! 4. Load configuration and build the [`OutputManager`].
//! 5. Run the subcommand and render any [`CliError`] with its exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument, warn};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Loaded before parsing so NO_COLOR and PROSER_* from .env are visible.
    let dotenv_error = dotenv_failure(dotenvy::dotenv());

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, with exit code 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("proser: {e}");
        return ExitCode::from(1);
    }
    if let Some(e) = dotenv_error {
        warn!(error = %e, "Ignoring unreadable .env file");
    }
    debug!(command = ?cli.command, "Arguments parsed");

    let verbose = cli.global.verbose > 0;
    match start(cli) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, verbose),
    }
}

/// `None` when `.env` loaded or simply is not there.
fn dotenv_failure(result: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

/// Load configuration, then hand off to the subcommand.
#[instrument(skip_all)]
fn start(cli: Cli) -> CliResult<()> {
    // `init` writes the file the loader would read, so it starts from defaults.
    let config = match cli.command {
        Commands::Init(_) => AppConfig::default(),
        _ => AppConfig::load(cli.global.config.as_ref())?,
    };
    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::Setup(cmd) => commands::setup::execute(cmd, config, output),
        Commands::Scan(cmd) => commands::scan::execute(cmd, config, output),
        Commands::Types(cmd) => commands::types::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, cli.global, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();
    let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, color));
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_metadata_comes_from_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "proser");
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
        assert!(cmd.get_author().is_some());
    }

    #[test]
    fn missing_dotenv_is_silent() {
        let missing = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(dotenv_failure(Err(dotenvy::Error::Io(missing))).is_none());
        assert!(dotenv_failure(Ok(PathBuf::from(".env"))).is_none());
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let bad = dotenvy::Error::LineParse("NO_COLOR".into(), 8);
        assert!(dotenv_failure(Err(bad)).is_some());

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(dotenv_failure(Err(dotenvy::Error::Io(denied))).is_some());
    }
}
