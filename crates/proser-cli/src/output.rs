//! Everything a command writes to stdout goes through [`OutputManager`],
//! which applies `--quiet`, colour and the resolved `--output-format`.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `auto` resolves to Human
    /// on a TTY and Plain when piped.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
            }
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Unstyled line; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.print(&line)
    }

    /// Pretty-printed JSON document; dropped under `--quiet` like [`Self::print`].
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("could not serialise output: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.print(&text)?;
        Ok(())
    }

    fn marked(&self, mark: Mark, msg: &str) -> io::Result<()> {
        let symbol = mark.symbol();
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            match mark {
                Mark::Success => format!("{} {}", symbol.green().bold(), msg.green()),
                Mark::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
                Mark::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
            }
        };
        self.print(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

#[derive(Clone, Copy)]
enum Mark {
    Success,
    Warning,
    Info,
}

impl Mark {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
