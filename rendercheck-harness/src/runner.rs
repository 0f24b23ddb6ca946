//! Run orchestration.
//!
//! Drives every selected suite through fan-out and verification against
//! injected engine, platform, and transcript implementations.

use rendercheck_engine::EngineLibrary;
use rendercheck_platform::Platform;
use thiserror::Error;

use crate::cases::CaseProvider;
use crate::cli::{Cli, CliError};
use crate::fanout::fan_out;
use crate::suites::SuiteError;
use crate::tally::RunTally;
use crate::transcript::Transcript;
use crate::verify::{verify_variant, VariantOutcome};

/// Errors from harness execution.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("suite error: {0}")]
    Suite(#[from] SuiteError),

    #[error("conformance failed: {failures} of {total} variants")]
    ConformanceFailed { total: usize, failures: usize },
}

/// Run every variant of every provided case and tally the results.
///
/// Variants get ascending ordinals across the whole run. Once
/// `max_failures` is reached the remaining variants do not run, and the
/// tally covers only the attempted ones.
pub fn execute_run<L, P, T>(
    providers: &[Box<dyn CaseProvider>],
    library: &L,
    platform: &P,
    transcript: &T,
    max_failures: Option<usize>,
) -> RunTally
where
    L: EngineLibrary,
    P: Platform,
    T: Transcript,
{
    transcript.info(&format!("engine version {}", library.version()));

    let mut tally = RunTally::new();
    let mut ordinal = 0;
    'run: for provider in providers {
        transcript.info(&format!("suite {}:", provider.name()));
        let case = provider.case();
        for variant in fan_out(&case) {
            ordinal += 1;
            transcript.info(&format!(
                "Test #{} [{}] [{}]",
                ordinal, variant.label, case.name
            ));
            match verify_variant(&case, &variant, library, platform, transcript) {
                VariantOutcome::Passed => tally.record_pass(),
                VariantOutcome::Failed(_) => {
                    tally.record_failure();
                    if let Some(cap) = max_failures {
                        if tally.failures >= cap {
                            transcript
                                .info(&format!("stopping after {} failures", tally.failures));
                            break 'run;
                        }
                    }
                }
            }
        }
    }

    transcript.info(&tally.summary());
    tally
}

/// Emit the provider names, one per line.
pub fn execute_list<T: Transcript>(providers: &[Box<dyn CaseProvider>], transcript: &T) {
    for provider in providers {
        transcript.info(provider.name());
    }
}

/// Run the harness the way the parsed CLI describes: validate the
/// arguments, handle `--list`, narrow to the selected suites, and turn a
/// failing tally into `RunnerError::ConformanceFailed`.
///
/// The binary calls this with the real engine, platform, and stdout
/// transcript; tests substitute scripted collaborators.
pub fn execute_cli<L, P, T>(
    cli: &Cli,
    providers: Vec<Box<dyn CaseProvider>>,
    library: &L,
    platform: &P,
    transcript: &T,
) -> Result<(), RunnerError>
where
    L: EngineLibrary,
    P: Platform,
    T: Transcript,
{
    let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
    cli.validate(&names)?;

    if cli.list {
        execute_list(&providers, transcript);
        return Ok(());
    }

    let selected: Vec<Box<dyn CaseProvider>> = if cli.suites.is_empty() {
        providers
    } else {
        providers
            .into_iter()
            .filter(|p| cli.suites.iter().any(|s| s == p.name()))
            .collect()
    };

    let tally = execute_run(&selected, library, platform, transcript, cli.max_failures);
    if tally.all_passed() {
        Ok(())
    } else {
        Err(RunnerError::ConformanceFailed {
            total: tally.total,
            failures: tally.failures,
        })
    }
}
