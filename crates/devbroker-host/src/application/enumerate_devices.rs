//! Stateless snapshot queries for cameras and printers.
//!
//! Both queries are pure reads: nothing is cached, nothing is invalidated,
//! and every call goes back to the source. Both are fail-soft by contract:
//! a missing surface, a platform failure, or an empty listing all produce an
//! empty sequence. The presentation layer never sees a distinct "not found"
//! or error signal on these paths, so callers here must not introduce one.

use tracing::warn;

use devbroker_core::{CameraDescriptor, MediaDeviceKind, PrinterDescriptor};

use crate::infrastructure::surface::{PresentationSurface, PrintSubsystem};

/// Snapshot of the video input devices visible to the presentation surface.
///
/// Filters the raw media enumeration down to video inputs, preserving the
/// surface's discovery order. `None` (no surface) and platform failures both
/// collapse to an empty list.
pub async fn get_camera(surface: Option<&dyn PresentationSurface>) -> Vec<CameraDescriptor> {
    let Some(surface) = surface else {
        return Vec::new();
    };

    match surface.enumerate_media_devices().await {
        Ok(devices) => devices
            .into_iter()
            .filter(|device| device.kind == MediaDeviceKind::VideoInput)
            .map(|device| CameraDescriptor {
                id: device.id,
                label: device.label,
            })
            .collect(),
        Err(e) => {
            warn!("media device enumeration failed: {e}");
            Vec::new()
        }
    }
}

/// Snapshot of the printers currently known to the host print subsystem.
///
/// Absence, error, and zero results are indistinguishable to the caller:
/// all three are an empty list.
pub async fn get_printers(subsystem: Option<&dyn PrintSubsystem>) -> Vec<PrinterDescriptor> {
    let Some(subsystem) = subsystem else {
        return Vec::new();
    };

    match subsystem.list_printers().await {
        Ok(printers) => printers,
        Err(e) => {
            warn!("printer listing failed: {e}");
            Vec::new()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
