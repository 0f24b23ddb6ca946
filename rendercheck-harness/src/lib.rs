//! Rendercheck conformance harness.
//!
//! Validates a template rendering engine against the cross-sink
//! contract: every case fans out over the supported source-text forms,
//! each variant renders through the string, file-handle, and path sinks,
//! the sinks are cross-checked against each other, and the result is
//! compared with the golden output.

pub mod cases;
pub mod cli;
pub mod diff;
pub mod exit;
pub mod fanout;
pub mod runner;
pub mod suites;
pub mod tally;
pub mod transcript;
pub mod verify;

pub use cases::{CaseProvider, TestCase};
pub use cli::{parse_from, Cli, CliError};
pub use diff::unified_diff;
pub use fanout::{fan_out, Variant};
pub use runner::{execute_cli, execute_list, execute_run, RunnerError};
pub use suites::{BindingSuite, DirectorySuite, LoaderSuite, SuiteError};
pub use tally::RunTally;
pub use transcript::{
    MockTranscript, NullTranscript, StdoutTranscript, Transcript, TranscriptEntry, Verbosity,
};
pub use verify::{verify_variant, VariantOutcome, VerifyError};
