//! Rendercheck CLI binary.
//!
//! Entry point for the `rendercheck` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use rendercheck_engine::MustacheLibrary;
use rendercheck_harness::exit::{codes, exit_code};
use rendercheck_harness::{execute_cli, suites, Cli, RunnerError, StdoutTranscript, Verbosity};
use rendercheck_platform::HostPlatform;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::from(codes::SUCCESS as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(exit_code(&e) as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunnerError> {
    let providers = suites::all()?;
    let transcript = StdoutTranscript::new(Verbosity::from_count(cli.verbose));
    execute_cli(
        cli,
        providers,
        &MustacheLibrary::new(),
        &HostPlatform,
        &transcript,
    )
}
