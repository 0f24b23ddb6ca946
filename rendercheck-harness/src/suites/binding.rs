//! Plain variable-binding suite.

use rendercheck_engine::MUSTACHE_ENGINE;
use serde_json::json;

use crate::cases::{CaseProvider, TestCase};

/// The hello-world scenario: one variable, no partials, no arguments.
#[derive(Debug, Default, Clone, Copy)]
pub struct BindingSuite;

impl BindingSuite {
    pub fn new() -> Self {
        Self
    }
}

impl CaseProvider for BindingSuite {
    fn name(&self) -> &str {
        "binding"
    }

    fn case(&self) -> TestCase {
        TestCase {
            name: "hello-world".to_string(),
            context: json!({"name": "World"}),
            golden: "Hello, World!".to_string(),
            source: "Hello, {{name}}!".to_string(),
            engine: MUSTACHE_ENGINE.to_string(),
            args: vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_suite_name() {
        assert_eq!(BindingSuite::new().name(), "binding");
    }

    #[test]
    fn test_binding_case_shape() {
        let case = BindingSuite::new().case();
        assert_eq!(case.name, "hello-world");
        assert_eq!(case.source, "Hello, {{name}}!");
        assert_eq!(case.golden, "Hello, World!");
        assert_eq!(case.engine, MUSTACHE_ENGINE);
        assert!(case.args.is_empty());
    }

    #[test]
    fn test_binding_case_is_stable() {
        let suite = BindingSuite::new();
        assert_eq!(suite.case(), suite.case());
    }
}
