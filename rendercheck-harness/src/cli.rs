//! CLI argument parsing for rendercheck.
//!
//! The harness has no subcommands: a plain invocation runs every bundled
//! suite, and flags narrow or inspect the run.

use clap::Parser;
use thiserror::Error;

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("max-failures must be at least 1, got {0}")]
    InvalidMaxFailures(usize),

    #[error("unknown suite: {0}")]
    UnknownSuite(String),
}

/// Conformance harness for template rendering engines.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "rendercheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run only the named suite. Repeatable; execution follows the
    /// bundled suite order, not the flag order.
    #[arg(long = "suite", value_name = "NAME")]
    pub suites: Vec<String>,

    /// Stop the run once this many variants have failed.
    #[arg(long, value_name = "N")]
    pub max_failures: Option<usize>,

    /// List the bundled suites and exit.
    #[arg(long)]
    pub list: bool,

    /// Show per-step transcript lines.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the arguments against the available suite names.
    pub fn validate(&self, available: &[&str]) -> Result<(), CliError> {
        if let Some(cap) = self.max_failures {
            if cap == 0 {
                return Err(CliError::InvalidMaxFailures(cap));
            }
        }
        for name in &self.suites {
            if !available.contains(&name.as_str()) {
                return Err(CliError::UnknownSuite(name.clone()));
            }
        }
        Ok(())
    }
}

/// Parse CLI arguments from an iterator of strings.
/// Useful for testing.
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
