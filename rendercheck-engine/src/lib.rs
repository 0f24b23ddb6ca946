//! Template-engine contract for rendercheck.
//!
//! Defines the narrow interface a rendering engine must implement to be
//! verified by the harness (construct from source text, render to string,
//! file, and path), plus two implementations: a small mustache-subset engine
//! so the harness runs end-to-end out of the box, and a scripted engine for
//! driving failure paths deterministically in tests.

pub mod contract;
pub mod mustache;
pub mod scripted;

pub use contract::{EngineLibrary, ParseError, RenderError, SourceText, Template};
pub use mustache::{MustacheLibrary, MUSTACHE_ENGINE};
pub use scripted::{Script, ScriptedLibrary, SinkBehavior};
