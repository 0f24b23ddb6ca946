//! The engine contract consumed by the harness.
//!
//! An engine plugs in through two traits: [`EngineLibrary`] compiles source
//! text into a template, and [`Template`] renders a compiled template with a
//! context through each of the three output sinks. The harness treats both as
//! opaque collaborators; everything it asserts about an engine goes through
//! this interface.

use std::fs::File;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Source text in one of the representations the contract accepts.
///
/// An engine must produce identical output regardless of which representation
/// the same logical text arrives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    /// Native string, the default representation.
    Text(String),
    /// UTF-8 encoded byte buffer.
    Utf8(Vec<u8>),
    /// UTF-16 code units.
    Utf16(Vec<u16>),
}

impl SourceText {
    /// Decode back to a native string.
    ///
    /// Fails when a byte or code-unit buffer is not valid in its claimed
    /// encoding.
    pub fn decode(&self) -> Result<String, ParseError> {
        match self {
            SourceText::Text(text) => Ok(text.clone()),
            SourceText::Utf8(bytes) => {
                String::from_utf8(bytes.clone()).map_err(|e| ParseError::InvalidEncoding {
                    encoding: "utf-8",
                    detail: e.to_string(),
                })
            }
            SourceText::Utf16(units) => {
                String::from_utf16(units).map_err(|e| ParseError::InvalidEncoding {
                    encoding: "utf-16",
                    detail: e.to_string(),
                })
            }
        }
    }
}

/// Errors from template construction.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("unterminated tag starting at byte {0}")]
    UnterminatedTag(usize),

    #[error("empty tag at byte {0}")]
    EmptyTag(usize),

    #[error("source is not valid {encoding}: {detail}")]
    InvalidEncoding {
        encoding: &'static str,
        detail: String,
    },

    /// Escape hatch for engines whose failure modes the fixed variants above
    /// cannot express.
    #[error("{0}")]
    Engine(String),
}

/// Errors from rendering a compiled template.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unresolved variable: {0}")]
    UnresolvedVariable(String),

    #[error("partial {0} not found in any template directory")]
    PartialNotFound(String),

    #[error("failed to read partial {name}: {source}")]
    PartialRead {
        name: String,
        source: std::io::Error,
    },

    #[error("partial {name} is malformed: {source}")]
    PartialParse { name: String, source: ParseError },

    #[error("partial inclusion exceeds depth {0}")]
    PartialDepth(usize),

    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),

    /// Escape hatch for engines whose failure modes the fixed variants above
    /// cannot express.
    #[error("{0}")]
    Engine(String),
}

/// A compiled template ready to render with a context.
///
/// The three sinks must produce byte-identical text for the same context, and
/// rendering must be repeatable: the same template and context always yield
/// the same output.
pub trait Template {
    /// Render into an in-memory string.
    fn render_to_string(&self, context: &Value) -> Result<String, RenderError>;

    /// Render the full output to an already-open, writable file handle.
    fn render_to_file(&self, file: &mut File, context: &Value) -> Result<(), RenderError>;

    /// Render the full output to the file at `path`, creating or truncating
    /// it.
    fn render_to_path(&self, path: &Path, context: &Value) -> Result<(), RenderError>;
}

/// A library of rendering engines selected by identifier.
pub trait EngineLibrary: Send + Sync {
    type Template: Template;

    /// Compile `source` for the engine named by `engine`.
    ///
    /// `args` are engine-specific construction parameters, passed through
    /// verbatim from the test case; the bundled engine reads them as an
    /// ordered list of template directories.
    fn construct(
        &self,
        source: &SourceText,
        engine: &str,
        args: &[String],
    ) -> Result<Self::Template, ParseError>;

    /// Library version, informational only.
    fn version(&self) -> String;
}
