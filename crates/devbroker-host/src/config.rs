//! Host configuration types.
//!
//! [`HostConfig`] is a plain struct with no global state and no environment
//! reads of its own; the binary populates it from CLI arguments, and tests
//! construct it directly. Keeping it inert makes the broker easy to embed.

use std::time::Duration;

/// Runtime configuration for the host broker loop.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// When a pending wireless selection older than this gets answered or
    /// cancelled, the host logs a warning. There is deliberately no expiry
    /// timer: the OS prompt stays open until the user or an overwrite
    /// resolves it, and this threshold only surfaces how stale prompts get
    /// in practice.
    pub stale_selection_warn_after: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            stale_selection_warn_after: Duration::from_secs(30),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
