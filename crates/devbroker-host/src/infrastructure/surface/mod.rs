//! Ports to the presentation surface and the host print subsystem.
//!
//! The broker never touches hardware or UI APIs directly. Everything it
//! needs from the outside world comes through these two traits:
//!
//! - [`PresentationSurface`] – "a handle to the presentation surface": the
//!   ability to ask the rendering side to enumerate its media input devices.
//! - [`PrintSubsystem`] – the host OS print stack: the current printer list.
//!
//! Both are snapshot sources. The broker holds them as `Option<Arc<dyn _>>`;
//! `None` models "no surface exists" (e.g. before the first window opens)
//! and collapses to an empty query result rather than an error.

use async_trait::async_trait;
use thiserror::Error;

use devbroker_core::{MediaDeviceInfo, PrinterDescriptor};

pub mod mock;

pub use mock::{ScriptedPrintSubsystem, ScriptedSurface};

/// Error type for surface and print subsystem queries.
///
/// Callers in the enumeration paths absorb these into empty results; the
/// variants exist so adapters can report what actually happened to the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The surface or subsystem existed but has since gone away.
    #[error("presentation surface is no longer attached")]
    Detached,
    /// The underlying platform call failed.
    #[error("platform call failed: {0}")]
    Platform(String),
}

/// Capability handle onto the sandboxed presentation surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresentationSurface: Send + Sync {
    /// Asks the presentation surface to enumerate its media devices.
    ///
    /// Returns every input/output device the surface can see; callers filter
    /// by kind. Order is discovery order as reported by the surface.
    async fn enumerate_media_devices(&self) -> Result<Vec<MediaDeviceInfo>, SurfaceError>;
}

/// Capability handle onto the host print stack.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintSubsystem: Send + Sync {
    /// Returns the printers currently known to the host, in discovery order.
    async fn list_printers(&self) -> Result<Vec<PrinterDescriptor>, SurfaceError>;
}
