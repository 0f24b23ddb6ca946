//! Per-variant verification.
//!
//! Runs one variant of a case through the engine contract in a fixed
//! order: build the template, render to a string, cross-check the
//! file-handle sink against that string, cross-check the path sink where
//! the platform allows it, then compare against the golden text. The
//! first failed step wins and later steps do not run.

use std::io::{Read, Seek};

use rendercheck_engine::{EngineLibrary, ParseError, RenderError, Template};
use rendercheck_platform::Platform;
use thiserror::Error;

use crate::cases::TestCase;
use crate::diff::unified_diff;
use crate::fanout::Variant;
use crate::transcript::Transcript;

/// Why a variant failed.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Template construction rejected the source.
    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    /// The string sink failed.
    #[error("render to string failed: {0}")]
    RenderToString(RenderError),

    /// The file-handle sink failed.
    #[error("render to file failed: {0}")]
    RenderToFile(RenderError),

    /// The path sink failed.
    #[error("render to path failed: {0}")]
    RenderToPath(RenderError),

    /// Temp file plumbing around a sink failed.
    #[error("temp file error in {sink} sink: {source}")]
    TempFile {
        sink: &'static str,
        source: std::io::Error,
    },

    /// A sink disagreed with the string sink's output.
    #[error("content mismatch between string and {sink} sinks")]
    ContentMismatch { sink: &'static str, diff: String },

    /// The rendered output disagreed with the golden text.
    #[error("golden mismatch")]
    GoldenMismatch { diff: String },
}

/// Outcome of one variant.
#[derive(Debug)]
pub enum VariantOutcome {
    Passed,
    Failed(VerifyError),
}

impl VariantOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, VariantOutcome::Passed)
    }
}

/// Verify one variant of a case against the engine contract.
///
/// A passing variant leaves only verbose step lines in the transcript;
/// a failing one gets an `x` line with the error and, for mismatches,
/// the diff indented under it.
pub fn verify_variant<L, P, T>(
    case: &TestCase,
    variant: &Variant,
    library: &L,
    platform: &P,
    transcript: &T,
) -> VariantOutcome
where
    L: EngineLibrary,
    P: Platform,
    T: Transcript,
{
    match run_steps(case, variant, library, platform, transcript) {
        Ok(()) => VariantOutcome::Passed,
        Err(error) => {
            report_failure(&error, transcript);
            VariantOutcome::Failed(error)
        }
    }
}

fn run_steps<L, P, T>(
    case: &TestCase,
    variant: &Variant,
    library: &L,
    platform: &P,
    transcript: &T,
) -> Result<(), VerifyError>
where
    L: EngineLibrary,
    P: Platform,
    T: Transcript,
{
    let template = library.construct(&variant.source, &case.engine, &case.args)?;
    transcript.verbose("- parse ok");

    let rendered = template
        .render_to_string(&case.context)
        .map_err(VerifyError::RenderToString)?;
    transcript.verbose("- render to string ok");

    let file_content = render_via_file(&template, case)?;
    if file_content != rendered {
        return Err(VerifyError::ContentMismatch {
            sink: "file",
            diff: unified_diff(&rendered, &file_content, "string", "file").unwrap_or_default(),
        });
    }
    transcript.verbose("- render to file ok");

    if platform.supports_reopen_while_open() {
        let path_content = render_via_path(&template, case)?;
        if path_content != rendered {
            return Err(VerifyError::ContentMismatch {
                sink: "path",
                diff: unified_diff(&rendered, &path_content, "string", "path").unwrap_or_default(),
            });
        }
        transcript.verbose("- render to path ok");
    } else {
        transcript.info("- render to path excluded on this platform");
    }

    if rendered != case.golden {
        return Err(VerifyError::GoldenMismatch {
            diff: unified_diff(&case.golden, &rendered, "golden", "rendered").unwrap_or_default(),
        });
    }
    transcript.verbose("- golden match");

    Ok(())
}

/// Render through the file-handle sink and read back what landed on disk.
fn render_via_file<T: Template>(template: &T, case: &TestCase) -> Result<String, VerifyError> {
    let temp = |source| VerifyError::TempFile {
        sink: "file",
        source,
    };
    let mut file = tempfile::tempfile().map_err(temp)?;
    template
        .render_to_file(&mut file, &case.context)
        .map_err(VerifyError::RenderToFile)?;
    file.rewind().map_err(temp)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(temp)?;
    Ok(content)
}

/// Render through the path sink while the harness holds the file open.
///
/// The harness keeps its own handle on the temp file while the engine
/// reopens the same path. That reopen is exactly what the
/// reopen-while-open capability gates, so this step only runs when the
/// platform reports support.
fn render_via_path<T: Template>(template: &T, case: &TestCase) -> Result<String, VerifyError> {
    let temp = |source| VerifyError::TempFile {
        sink: "path",
        source,
    };
    let mut file = tempfile::NamedTempFile::new().map_err(temp)?;
    template
        .render_to_path(file.path(), &case.context)
        .map_err(VerifyError::RenderToPath)?;
    file.rewind().map_err(temp)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(temp)?;
    Ok(content)
}

fn report_failure<T: Transcript>(error: &VerifyError, transcript: &T) {
    transcript.info(&format!("x {}", error));
    let diff = match error {
        VerifyError::ContentMismatch { diff, .. } => Some(diff),
        VerifyError::GoldenMismatch { diff } => Some(diff),
        _ => None,
    };
    if let Some(diff) = diff {
        for line in diff.lines() {
            transcript.info(&format!("  {}", line));
        }
    }
}
