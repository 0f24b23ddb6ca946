//! Ordered template-lookup suite.

use rendercheck_engine::MUSTACHE_ENGINE;
use serde_json::json;
use tempfile::TempDir;

use crate::cases::{CaseProvider, TestCase};
use crate::suites::SuiteError;

/// A case proving partial lookup honors directory order: the primary
/// directory shadows the fallback for one name, while another name only
/// exists in the fallback and must still resolve.
#[derive(Debug)]
pub struct LoaderSuite {
    primary: TempDir,
    fallback: TempDir,
}

impl LoaderSuite {
    pub fn new() -> Result<Self, SuiteError> {
        let primary = TempDir::new()?;
        let fallback = TempDir::new()?;
        std::fs::write(primary.path().join("header"), "[{{title}}]")?;
        std::fs::write(fallback.path().join("header"), "[shadowed]")?;
        std::fs::write(fallback.path().join("signature"), "-- {{author}}")?;
        Ok(Self { primary, fallback })
    }
}

impl CaseProvider for LoaderSuite {
    fn name(&self) -> &str {
        "loader"
    }

    fn case(&self) -> TestCase {
        TestCase {
            name: "ordered-lookup".to_string(),
            context: json!({"title": "Notes", "author": "me"}),
            golden: "[Notes] body -- me".to_string(),
            source: "{{>header}} body {{>signature}}".to_string(),
            engine: MUSTACHE_ENGINE.to_string(),
            args: vec![
                self.primary.path().display().to_string(),
                self.fallback.path().display().to_string(),
            ],
        }
    }
}
