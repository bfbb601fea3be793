//! Tracing subscriber setup.
//!
//! Only the binary installs a subscriber; `proser-core` and `proser-adapters`
//! emit spans and events and never touch global state.
//!
//! `--quiet` logs errors only, no flag logs warnings, and each `-v` steps
//! through info, debug and trace. `RUST_LOG` replaces the derived filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the derived level.
const LOG_TARGETS: &[&str] = &["proser", "proser_cli", "proser_core", "proser_adapters"];

/// Install the global tracing subscriber, writing to stderr.
///
/// Event targets are printed only at trace level, where events from the
/// scanner and the writers interleave.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level == LevelFilter::TRACE)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    match (args.quiet, args.verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn directive(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_steps_through_levels() {
        let levels: Vec<_> = [0, 1, 2, 3, 10]
            .into_iter()
            .map(|v| level_for(&args_with(v, false)))
            .collect();
        assert_eq!(
            levels,
            [
                LevelFilter::WARN,
                LevelFilter::INFO,
                LevelFilter::DEBUG,
                LevelFilter::TRACE,
                LevelFilter::TRACE
            ]
        );
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(level_for(&args_with(3, true)), LevelFilter::ERROR);
    }

    #[test]
    fn directive_names_every_crate() {
        let directive = directive(LevelFilter::DEBUG);
        assert_eq!(
            directive,
            "proser=debug,proser_cli=debug,proser_core=debug,proser_adapters=debug"
        );
        assert!(EnvFilter::try_new(directive).is_ok());
    }
}
