//! The wireless chooser state machine.
//!
//! The OS wireless stack raises a device-selection prompt asynchronously: it
//! hands over a candidate list together with a single-use answer callback,
//! and the default UI is suppressed in favour of this coordinator. The
//! presentation process later reads the candidates (`get-bluetooth-devices`)
//! and answers through a *different* request (`connect-to-bluetooth-device`),
//! so the coordinator must hold the suspended prompt in between.
//!
//! # States
//!
//! ```text
//!               chooser event                    connect(id)
//!   Idle  ────────────────────────►  Pending  ────────────────►  Idle
//!     ▲                                 │
//!     │        chooser event            │  (previous prompt is
//!     └────── (overwrite: cancel ◄──────┘   cancelled with "")
//!              previous, install new)
//! ```
//!
//! At most one [`PendingSelection`] is alive at any time. It is owned
//! exclusively by the coordinator, which in turn is owned by the single
//! host loop task, so no locking is involved.

use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use devbroker_core::WirelessDescriptor;

/// The id value that cancels a chooser prompt.
///
/// The OS chooser contract treats an empty id as "no device chosen".
pub const CANCEL_SELECTION: &str = "";

/// Single-use answer callback for one chooser prompt.
///
/// Resolving consumes the value, so answering the same prompt twice is not
/// expressible. If the hardware side stopped listening the answer is
/// silently discarded; the prompt is gone either way.
#[derive(Debug)]
pub struct ChooserResolver {
    tx: oneshot::Sender<String>,
}

impl ChooserResolver {
    /// Creates a resolver and the receiver the hardware layer awaits.
    pub fn new() -> (Self, oneshot::Receiver<String>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Answers the prompt with the chosen device id.
    pub fn resolve(self, device_id: impl Into<String>) {
        let _ = self.tx.send(device_id.into());
    }

    /// Answers the prompt with "no device chosen".
    pub fn cancel(self) {
        self.resolve(CANCEL_SELECTION);
    }
}

/// One chooser event as delivered by the hardware layer.
#[derive(Debug)]
pub struct ChooserRequest {
    pub candidates: Vec<WirelessDescriptor>,
    pub resolver: ChooserResolver,
}

/// The suspended prompt held between the chooser event and its answer.
///
/// Constructed only in [`SelectionCoordinator::chooser_requested`]; cleared
/// only by `connect`, by the overwrite path, or by shutdown. Never mutated
/// in place.
#[derive(Debug)]
struct PendingSelection {
    candidates: Vec<WirelessDescriptor>,
    resolver: ChooserResolver,
    created_at: Instant,
}

/// Single-slot coordinator for the wireless chooser.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    slot: Option<PendingSelection>,
    /// Answering or cancelling a prompt older than this logs a warning.
    /// `None` disables the check (unit tests mostly run without it).
    stale_warn_after: Option<Duration>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the staleness threshold used for the age warning.
    pub fn with_stale_warning(mut self, warn_after: Duration) -> Self {
        self.stale_warn_after = Some(warn_after);
        self
    }

    /// `true` while a chooser prompt is suspended and unanswered.
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Captures a chooser event: takes ownership of the candidate list and
    /// the resolver, suppressing the default prompt.
    ///
    /// A second event arriving while one is pending first cancels the live
    /// prompt (its resolver receives `""`) and then installs the new one.
    /// A live resolver is never silently dropped.
    pub fn chooser_requested(
        &mut self,
        candidates: Vec<WirelessDescriptor>,
        resolver: ChooserResolver,
    ) {
        if let Some(previous) = self.slot.take() {
            info!(
                age_ms = previous.created_at.elapsed().as_millis() as u64,
                "new chooser event while one is pending; cancelling the previous prompt"
            );
            self.warn_if_stale(&previous);
            previous.resolver.cancel();
        }

        info!(candidates = candidates.len(), "wireless chooser event captured");
        self.slot = Some(PendingSelection {
            candidates,
            resolver,
            created_at: Instant::now(),
        });
    }

    /// Read-only peek at the pending candidates.
    ///
    /// Returns the current candidate list if a prompt is pending, otherwise
    /// an empty list. Never transitions state.
    pub fn bluetooth_devices(&self) -> Vec<WirelessDescriptor> {
        self.slot
            .as_ref()
            .map(|pending| pending.candidates.clone())
            .unwrap_or_default()
    }

    /// Answers the pending prompt with `device_id` and returns to idle.
    ///
    /// With no prompt pending this is a silent no-op by contract: it neither
    /// errors nor queues the id for a future prompt. Returns whether a
    /// prompt was actually resolved, for the caller's log line.
    pub fn connect(&mut self, device_id: &str) -> bool {
        match self.slot.take() {
            Some(pending) => {
                self.warn_if_stale(&pending);
                debug!(device_id, "resolving pending wireless selection");
                pending.resolver.resolve(device_id);
                true
            }
            None => {
                debug!(device_id, "connect requested with no pending selection; ignoring");
                false
            }
        }
    }

    /// Cancels any pending prompt. Called when the host loop shuts down so
    /// the OS-level prompt is not left hanging on a dead resolver.
    pub fn shutdown(&mut self) {
        if let Some(pending) = self.slot.take() {
            info!("host shutting down with a pending selection; cancelling it");
            pending.resolver.cancel();
        }
    }

    fn warn_if_stale(&self, pending: &PendingSelection) {
        if let Some(threshold) = self.stale_warn_after {
            let age = pending.created_at.elapsed();
            if age > threshold {
                warn!(
                    age_secs = age.as_secs(),
                    "pending wireless selection was outstanding unusually long"
                );
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
