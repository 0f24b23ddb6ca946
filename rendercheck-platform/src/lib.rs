//! Platform capability abstraction for rendercheck.
//!
//! Provides a trait describing what the host filesystem allows, with both real
//! and fixed implementations to enable deterministic testing. The harness uses
//! this to decide whether path-sink verification can run at all, instead of
//! sprinkling platform-name checks through the verification code.

/// Trait for querying host filesystem capabilities.
pub trait Platform: Send + Sync {
    /// Whether a temporary file that is already open can be reopened through
    /// its path for a concurrent read. False on Windows, where the default
    /// share mode refuses the second open.
    fn supports_reopen_while_open(&self) -> bool;
}

/// Capabilities of the host operating system, resolved at compile time.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl Platform for HostPlatform {
    fn supports_reopen_while_open(&self) -> bool {
        !cfg!(windows)
    }
}

/// Fixed capabilities for testing both sides of the platform gate.
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform {
    reopen_while_open: bool,
}

impl FixedPlatform {
    /// Create a platform with the given reopen capability.
    pub fn new(reopen_while_open: bool) -> Self {
        Self { reopen_while_open }
    }

    /// A platform where every capability is available.
    pub fn permissive() -> Self {
        Self::new(true)
    }

    /// A platform where reopening an open file is refused.
    pub fn restricted() -> Self {
        Self::new(false)
    }
}

impl Platform for FixedPlatform {
    fn supports_reopen_while_open(&self) -> bool {
        self.reopen_while_open
    }
}
