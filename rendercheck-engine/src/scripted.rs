//! Scripted engine for harness tests.
//!
//! `ScriptedLibrary` reports exactly what a `Script` tells it to: parse
//! failures, per-sink divergence, per-sink render errors. It also records
//! every contract call so tests can assert which sinks were exercised and
//! in what order.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use crate::contract::{EngineLibrary, ParseError, RenderError, SourceText, Template};

/// What a scripted sink does when asked to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkBehavior {
    /// Produce the script's output faithfully.
    Render,
    /// Produce this text instead of the script's output.
    Diverge(String),
    /// Fail with this message.
    Fail(String),
}

/// A canned engine behavior.
#[derive(Debug, Clone)]
pub struct Script {
    parse_failure: Option<String>,
    output: String,
    string_sink: SinkBehavior,
    file_sink: SinkBehavior,
    path_sink: SinkBehavior,
}

impl Script {
    /// A script whose every sink faithfully produces `output`.
    pub fn rendering(output: &str) -> Self {
        Self {
            parse_failure: None,
            output: output.to_string(),
            string_sink: SinkBehavior::Render,
            file_sink: SinkBehavior::Render,
            path_sink: SinkBehavior::Render,
        }
    }

    /// A script whose construction fails with `message`.
    pub fn failing_parse(message: &str) -> Self {
        Self {
            parse_failure: Some(message.to_string()),
            output: String::new(),
            string_sink: SinkBehavior::Render,
            file_sink: SinkBehavior::Render,
            path_sink: SinkBehavior::Render,
        }
    }

    pub fn with_string_sink(mut self, behavior: SinkBehavior) -> Self {
        self.string_sink = behavior;
        self
    }

    pub fn with_file_sink(mut self, behavior: SinkBehavior) -> Self {
        self.file_sink = behavior;
        self
    }

    pub fn with_path_sink(mut self, behavior: SinkBehavior) -> Self {
        self.path_sink = behavior;
        self
    }
}

/// Engine library that follows a `Script` and records contract calls.
#[derive(Debug, Clone)]
pub struct ScriptedLibrary {
    script: Script,
    calls: Arc<RwLock<Vec<String>>>,
}

impl ScriptedLibrary {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// All recorded contract calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// How many times `name` was called.
    pub fn call_count(&self, name: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == name)
            .count()
    }

    fn record(&self, name: &str) {
        self.calls.write().unwrap().push(name.to_string());
    }
}

impl EngineLibrary for ScriptedLibrary {
    type Template = ScriptedTemplate;

    fn construct(
        &self,
        _source: &SourceText,
        _engine: &str,
        _args: &[String],
    ) -> Result<ScriptedTemplate, ParseError> {
        self.record("construct");
        if let Some(message) = &self.script.parse_failure {
            return Err(ParseError::Engine(message.clone()));
        }
        Ok(ScriptedTemplate {
            script: self.script.clone(),
            calls: Arc::clone(&self.calls),
        })
    }

    fn version(&self) -> String {
        "scripted".to_string()
    }
}

/// Template handed out by `ScriptedLibrary`.
#[derive(Debug, Clone)]
pub struct ScriptedTemplate {
    script: Script,
    calls: Arc<RwLock<Vec<String>>>,
}

impl ScriptedTemplate {
    fn record(&self, name: &str) {
        self.calls.write().unwrap().push(name.to_string());
    }

    fn resolve(&self, behavior: &SinkBehavior) -> Result<String, RenderError> {
        match behavior {
            SinkBehavior::Render => Ok(self.script.output.clone()),
            SinkBehavior::Diverge(text) => Ok(text.clone()),
            SinkBehavior::Fail(message) => Err(RenderError::Engine(message.clone())),
        }
    }
}

impl Template for ScriptedTemplate {
    fn render_to_string(&self, _context: &Value) -> Result<String, RenderError> {
        self.record("render_to_string");
        self.resolve(&self.script.string_sink)
    }

    fn render_to_file(&self, file: &mut File, _context: &Value) -> Result<(), RenderError> {
        self.record("render_to_file");
        let content = self.resolve(&self.script.file_sink)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn render_to_path(&self, path: &Path, _context: &Value) -> Result<(), RenderError> {
        self.record("render_to_path");
        let content = self.resolve(&self.script.path_sink)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
