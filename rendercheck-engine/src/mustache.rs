//! Bundled mustache-subset engine.
//!
//! Implements the engine contract with just enough syntax for conformance
//! cases: `{{name}}` substitutes a context value, `{{>partial}}` includes a
//! template file resolved against the directories passed as construction
//! arguments, and everything else is emitted verbatim. Partials resolve at
//! render time, first directory wins.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::contract::{EngineLibrary, ParseError, RenderError, SourceText, Template};

/// Identifier the bundled library answers to.
pub const MUSTACHE_ENGINE: &str = "mustache-like";

/// Maximum nesting of partial inclusions before rendering gives up.
const MAX_PARTIAL_DEPTH: usize = 16;

/// The bundled engine library.
#[derive(Debug, Default, Clone, Copy)]
pub struct MustacheLibrary;

impl MustacheLibrary {
    pub fn new() -> Self {
        Self
    }
}

impl EngineLibrary for MustacheLibrary {
    type Template = MustacheTemplate;

    fn construct(
        &self,
        source: &SourceText,
        engine: &str,
        args: &[String],
    ) -> Result<MustacheTemplate, ParseError> {
        if engine != MUSTACHE_ENGINE {
            return Err(ParseError::UnknownEngine(engine.to_string()));
        }
        let text = source.decode()?;
        let segments = parse(&text)?;
        let directories = args.iter().map(PathBuf::from).collect();
        Ok(MustacheTemplate {
            segments,
            directories,
        })
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// A compiled template: literal runs and tags, in source order.
#[derive(Debug, Clone)]
pub struct MustacheTemplate {
    segments: Vec<Segment>,
    directories: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
    Partial(String),
}

/// Split source text into segments.
fn parse(source: &str) -> Result<Vec<Segment>, ParseError> {
    let mut segments = Vec::new();
    let mut rest = source;
    let mut offset = 0;

    while let Some(open) = rest.find("{{") {
        if open > 0 {
            segments.push(Segment::Literal(rest[..open].to_string()));
        }
        let after = &rest[open + 2..];
        let close = after
            .find("}}")
            .ok_or(ParseError::UnterminatedTag(offset + open))?;
        let tag = after[..close].trim();
        if tag.is_empty() {
            return Err(ParseError::EmptyTag(offset + open));
        }
        if let Some(name) = tag.strip_prefix('>') {
            segments.push(Segment::Partial(name.trim().to_string()));
        } else {
            segments.push(Segment::Variable(tag.to_string()));
        }
        offset += open + 2 + close + 2;
        rest = &after[close + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    Ok(segments)
}

/// Resolve a variable against the context map.
fn lookup(context: &Value, name: &str) -> Result<String, RenderError> {
    let value = context
        .get(name)
        .ok_or_else(|| RenderError::UnresolvedVariable(name.to_string()))?;
    Ok(match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

impl MustacheTemplate {
    /// Expand the template with `context` into its rendered text.
    fn render(&self, context: &Value) -> Result<String, RenderError> {
        self.render_segments(&self.segments, context, 0)
    }

    fn render_segments(
        &self,
        segments: &[Segment],
        context: &Value,
        depth: usize,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => out.push_str(&lookup(context, name)?),
                Segment::Partial(name) => {
                    out.push_str(&self.render_partial(name, context, depth)?)
                }
            }
        }
        Ok(out)
    }

    fn render_partial(
        &self,
        name: &str,
        context: &Value,
        depth: usize,
    ) -> Result<String, RenderError> {
        if depth >= MAX_PARTIAL_DEPTH {
            return Err(RenderError::PartialDepth(MAX_PARTIAL_DEPTH));
        }
        let path = self
            .directories
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| RenderError::PartialNotFound(name.to_string()))?;
        let text = std::fs::read_to_string(&path).map_err(|source| RenderError::PartialRead {
            name: name.to_string(),
            source,
        })?;
        let segments = parse(&text).map_err(|source| RenderError::PartialParse {
            name: name.to_string(),
            source,
        })?;
        self.render_segments(&segments, context, depth + 1)
    }
}

impl Template for MustacheTemplate {
    fn render_to_string(&self, context: &Value) -> Result<String, RenderError> {
        self.render(context)
    }

    fn render_to_file(&self, file: &mut File, context: &Value) -> Result<(), RenderError> {
        let rendered = self.render(context)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn render_to_path(&self, path: &Path, context: &Value) -> Result<(), RenderError> {
        let rendered = self.render(context)?;
        let mut file = File::create(path)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
