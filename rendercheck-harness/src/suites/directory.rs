//! Partial-from-directory suite.

use rendercheck_engine::MUSTACHE_ENGINE;
use serde_json::json;
use tempfile::TempDir;

use crate::cases::{CaseProvider, TestCase};
use crate::suites::SuiteError;

/// A case whose template pulls a partial from a directory written at
/// suite setup. The directory lives as long as the suite does.
#[derive(Debug)]
pub struct DirectorySuite {
    dir: TempDir,
}

impl DirectorySuite {
    pub fn new() -> Result<Self, SuiteError> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join("greeting"), "Hello, {{name}}")?;
        Ok(Self { dir })
    }
}

impl CaseProvider for DirectorySuite {
    fn name(&self) -> &str {
        "directory"
    }

    fn case(&self) -> TestCase {
        TestCase {
            name: "partial-from-directory".to_string(),
            context: json!({"name": "World"}),
            golden: "Hello, World from a partial".to_string(),
            source: "{{>greeting}} from a partial".to_string(),
            engine: MUSTACHE_ENGINE.to_string(),
            args: vec![self.dir.path().display().to_string()],
        }
    }
}
