//! Conformance case definitions.
//!
//! A case pins down one rendering scenario: the template source in its
//! default form, the context to render it against, and the golden output
//! every sink must reproduce.

use serde_json::Value;

/// A single conformance scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// Case name, shown in transcript lines.
    pub name: String,
    /// Context the template renders against.
    pub context: Value,
    /// Expected rendered output.
    pub golden: String,
    /// Template source text in its default form.
    pub source: String,
    /// Engine identifier handed to the library.
    pub engine: String,
    /// Engine-specific construction arguments.
    pub args: Vec<String>,
}

/// Supplies one named conformance case.
///
/// Providers own whatever backing state their case needs, such as
/// temporary partial directories, and keep it alive for the whole run.
pub trait CaseProvider: Send + Sync {
    /// Stable name used for suite selection and transcript lines.
    fn name(&self) -> &str;

    /// Build the case.
    fn case(&self) -> TestCase;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TestCase {
        TestCase {
            name: "sample".to_string(),
            context: json!({"name": "World"}),
            golden: "Hello, World!".to_string(),
            source: "Hello, {{name}}!".to_string(),
            engine: "mustache-like".to_string(),
            args: vec![],
        }
    }

    #[test]
    fn test_case_clone_eq() {
        let case = sample();
        assert_eq!(case.clone(), case);
    }

    #[test]
    fn test_case_inequality_on_golden() {
        let case = sample();
        let mut other = case.clone();
        other.golden = "Hello, Welt!".to_string();
        assert_ne!(case, other);
    }

    #[test]
    fn test_case_debug_names_fields() {
        let text = format!("{:?}", sample());
        assert!(text.contains("sample"));
        assert!(text.contains("golden"));
    }
}
