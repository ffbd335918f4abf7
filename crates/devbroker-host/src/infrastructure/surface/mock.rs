//! Scripted port adapters for tests and the headless binary.
//!
//! These return whatever they were loaded with and count how often they are
//! queried, which lets tests assert the snapshot-per-call behavior of the
//! enumeration service without a real window or OS print stack.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use devbroker_core::{MediaDeviceInfo, PrinterDescriptor};

use super::{PresentationSurface, PrintSubsystem, SurfaceError};

/// A [`PresentationSurface`] that serves a scripted device list.
pub struct ScriptedSurface {
    devices: Mutex<Result<Vec<MediaDeviceInfo>, SurfaceError>>,
    calls: AtomicUsize,
}

impl ScriptedSurface {
    /// Creates a surface that reports the given devices on every call.
    pub fn new(devices: Vec<MediaDeviceInfo>) -> Self {
        Self {
            devices: Mutex::new(Ok(devices)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a surface whose enumeration always fails.
    pub fn failing(error: SurfaceError) -> Self {
        Self {
            devices: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replaces the scripted device list.
    pub fn set_devices(&self, devices: Vec<MediaDeviceInfo>) {
        *self.devices.lock().expect("lock poisoned") = Ok(devices);
    }

    /// Number of times the surface has been enumerated.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PresentationSurface for ScriptedSurface {
    async fn enumerate_media_devices(&self) -> Result<Vec<MediaDeviceInfo>, SurfaceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.devices.lock().expect("lock poisoned").clone()
    }
}

/// A [`PrintSubsystem`] that serves a scripted printer list.
pub struct ScriptedPrintSubsystem {
    printers: Mutex<Result<Vec<PrinterDescriptor>, SurfaceError>>,
    calls: AtomicUsize,
}

impl ScriptedPrintSubsystem {
    /// Creates a subsystem that reports the given printers on every call.
    pub fn new(printers: Vec<PrinterDescriptor>) -> Self {
        Self {
            printers: Mutex::new(Ok(printers)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Creates a subsystem whose listing always fails.
    pub fn failing(error: SurfaceError) -> Self {
        Self {
            printers: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the printer list has been queried.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl PrintSubsystem for ScriptedPrintSubsystem {
    async fn list_printers(&self) -> Result<Vec<PrinterDescriptor>, SurfaceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.printers.lock().expect("lock poisoned").clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use devbroker_core::MediaDeviceKind;

    #[tokio::test]
    async fn test_scripted_surface_serves_devices_and_counts_calls() {
        // Arrange
        let surface = ScriptedSurface::new(vec![MediaDeviceInfo {
            id: "cam0".to_string(),
            kind: MediaDeviceKind::VideoInput,
            label: "Integrated Camera".to_string(),
        }]);

        // Act
        let first = surface.enumerate_media_devices().await.unwrap();
        let second = surface.enumerate_media_devices().await.unwrap();

        // Assert
        assert_eq!(first, second);
        assert_eq!(surface.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_surface_returns_the_scripted_error() {
        let surface = ScriptedSurface::failing(SurfaceError::Detached);
        let result = surface.enumerate_media_devices().await;
        assert_eq!(result, Err(SurfaceError::Detached));
    }

    #[tokio::test]
    async fn test_set_devices_replaces_the_snapshot() {
        let surface = ScriptedSurface::new(vec![]);
        surface.set_devices(vec![MediaDeviceInfo {
            id: "cam1".to_string(),
            kind: MediaDeviceKind::VideoInput,
            label: "USB Camera".to_string(),
        }]);

        let devices = surface.enumerate_media_devices().await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "cam1");
    }
}
