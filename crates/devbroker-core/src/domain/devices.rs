//! Device descriptor types returned by enumeration and selection queries.
//!
//! These structs cross the bridge as JSON, so field names follow the
//! presentation-side contract (`displayName`, not `display_name`). Sequences
//! of descriptors preserve discovery order and may contain duplicates; the
//! broker passes through whatever the host hardware stack reported.

use serde::{Deserialize, Serialize};

// ── Raw media enumeration ─────────────────────────────────────────────────────

/// Kind discriminant for a media input/output device as reported by the
/// presentation surface.
///
/// The wire values match the media device enumeration contract of the
/// presentation runtime (`"videoinput"` etc.), which is why they are single
/// lowercase words rather than kebab-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDeviceKind {
    AudioInput,
    AudioOutput,
    VideoInput,
}

/// One raw media device record from the presentation surface.
///
/// `get-camera` filters these down to [`MediaDeviceKind::VideoInput`] entries
/// before answering; audio devices never cross the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDeviceInfo {
    /// Opaque device identifier assigned by the platform.
    pub id: String,
    /// What the device produces or consumes.
    pub kind: MediaDeviceKind,
    /// Human-readable label (may be empty when the surface lacks permission
    /// to reveal it).
    pub label: String,
}

// ── Descriptors returned to the presentation process ──────────────────────────

/// A video input device, as returned by `get-camera`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraDescriptor {
    /// Opaque platform identifier, stable for the lifetime of the device.
    pub id: String,
    /// Human-readable label.
    pub label: String,
}

/// A printer known to the host print subsystem, as returned by `get-printers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterDescriptor {
    /// System name used to address the printer (e.g. in a print job).
    pub name: String,
    /// Name shown to the user.
    pub display_name: String,
}

/// A short-range wireless device offered by an OS chooser prompt.
///
/// Only `id` participates in selection; `name` is carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WirelessDescriptor {
    /// Opaque platform identifier; the value handed back on connect.
    pub id: String,
    /// Advertised device name (may be empty for anonymous advertisers).
    #[serde(default)]
    pub name: String,
}

impl WirelessDescriptor {
    /// Convenience constructor used heavily in tests and mock adapters.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_device_kind_uses_platform_wire_names() {
        let json = serde_json::to_string(&MediaDeviceKind::VideoInput).unwrap();
        assert_eq!(json, "\"videoinput\"");

        let kind: MediaDeviceKind = serde_json::from_str("\"audioinput\"").unwrap();
        assert_eq!(kind, MediaDeviceKind::AudioInput);
    }

    #[test]
    fn test_printer_descriptor_serializes_display_name_as_camel_case() {
        let printer = PrinterDescriptor {
            name: "HP_LaserJet".to_string(),
            display_name: "HP LaserJet (office)".to_string(),
        };
        let value = serde_json::to_value(&printer).unwrap();
        assert_eq!(value["displayName"], "HP LaserJet (office)");
        assert!(value.get("display_name").is_none());
    }

    #[test]
    fn test_wireless_descriptor_name_defaults_to_empty_on_deserialize() {
        let device: WirelessDescriptor = serde_json::from_str(r#"{"id":"A"}"#).unwrap();
        assert_eq!(device.id, "A");
        assert_eq!(device.name, "");
    }

    #[test]
    fn test_descriptor_sequences_preserve_order_and_duplicates() {
        // The broker makes no uniqueness guarantee; whatever the hardware
        // stack reports is passed through unchanged.
        let devices = vec![
            WirelessDescriptor::new("A", "headset"),
            WirelessDescriptor::new("B", "keyboard"),
            WirelessDescriptor::new("A", "headset"),
        ];
        let json = serde_json::to_string(&devices).unwrap();
        let back: Vec<WirelessDescriptor> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, devices);
    }
}
