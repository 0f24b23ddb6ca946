//! Bundled conformance suites.
//!
//! Each suite contributes one case aimed at a distinct slice of the
//! engine contract: plain variable binding, partial resolution from a
//! directory, and ordered lookup across several directories.

mod binding;
mod directory;
mod loader;

pub use binding::BindingSuite;
pub use directory::DirectorySuite;
pub use loader::LoaderSuite;

use thiserror::Error;

use crate::cases::CaseProvider;

/// Errors preparing suite backing state.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to prepare suite fixtures: {0}")]
    Fixture(#[from] std::io::Error),
}

/// All bundled suites, in run order.
pub fn all() -> Result<Vec<Box<dyn CaseProvider>>, SuiteError> {
    Ok(vec![
        Box::new(BindingSuite::new()),
        Box::new(DirectorySuite::new()?),
        Box::new(LoaderSuite::new()?),
    ])
}
