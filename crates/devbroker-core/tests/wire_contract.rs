//! Integration tests for the devbroker-core wire contract.
//!
//! These pin down the JSON shapes the presentation process actually sends
//! and receives, exercised through the public API only. The command names
//! and field spellings here are compatibility-critical: a change that makes
//! one of these tests fail breaks deployed presentation builds.

use serde_json::json;

use devbroker_core::{
    CameraDescriptor, CommandKind, ConnectArgs, MediaDeviceInfo, MediaDeviceKind, PrintArgs,
    PrinterDescriptor, WirelessDescriptor, TOPIC_IPC_EXAMPLE,
};

#[test]
fn test_command_wire_names_are_pinned() {
    let expected = [
        "get-camera",
        "get-printers",
        "get-bluetooth-devices",
        "connect-to-bluetooth-device",
        "print-file",
    ];
    for (command, name) in CommandKind::ALL.iter().zip(expected) {
        assert_eq!(command.as_str(), name);
        assert_eq!(name.parse::<CommandKind>().unwrap(), *command);
    }
    assert_eq!(TOPIC_IPC_EXAMPLE, "ipc-example");
}

#[test]
fn test_connect_payload_as_sent_by_the_presentation_process() {
    let payload = json!({ "deviceId": "aa:bb:cc:dd:ee:ff" });
    let args: ConnectArgs = serde_json::from_value(payload).unwrap();
    assert_eq!(args.device_id, "aa:bb:cc:dd:ee:ff");
}

#[test]
fn test_print_payload_as_sent_by_the_presentation_process() {
    let payload = json!({ "filePath": "/tmp/report.pdf", "printerName": "HP_LaserJet" });
    let args: PrintArgs = serde_json::from_value(payload).unwrap();
    assert_eq!(args.file_path, "/tmp/report.pdf");
    assert_eq!(args.printer_name, "HP_LaserJet");
}

#[test]
fn test_camera_reply_shape_seen_by_the_presentation_process() {
    let cameras = vec![CameraDescriptor {
        id: "cam0".to_string(),
        label: "Integrated Camera".to_string(),
    }];
    let value = serde_json::to_value(&cameras).unwrap();
    assert_eq!(
        value,
        json!([{ "id": "cam0", "label": "Integrated Camera" }])
    );
}

#[test]
fn test_printer_reply_uses_camel_case_display_name() {
    let printers = vec![PrinterDescriptor {
        name: "PDF".to_string(),
        display_name: "Print to PDF".to_string(),
    }];
    let value = serde_json::to_value(&printers).unwrap();
    assert_eq!(value, json!([{ "name": "PDF", "displayName": "Print to PDF" }]));
}

#[test]
fn test_wireless_candidates_round_trip_with_optional_name() {
    // Anonymous advertisers come through with no name field at all.
    let value = json!([{ "id": "A", "name": "headset" }, { "id": "B" }]);
    let devices: Vec<WirelessDescriptor> = serde_json::from_value(value).unwrap();
    assert_eq!(
        devices,
        vec![
            WirelessDescriptor::new("A", "headset"),
            WirelessDescriptor::new("B", ""),
        ]
    );
}

#[test]
fn test_media_device_kind_accepts_platform_enumeration_values() {
    let raw = json!([
        { "id": "cam0", "kind": "videoinput", "label": "Camera" },
        { "id": "mic0", "kind": "audioinput", "label": "Microphone" },
        { "id": "spk0", "kind": "audiooutput", "label": "Speakers" }
    ]);
    let devices: Vec<MediaDeviceInfo> = serde_json::from_value(raw).unwrap();
    assert_eq!(devices[0].kind, MediaDeviceKind::VideoInput);
    assert_eq!(devices[1].kind, MediaDeviceKind::AudioInput);
    assert_eq!(devices[2].kind, MediaDeviceKind::AudioOutput);
}

#[test]
fn test_unknown_command_names_do_not_parse() {
    for name in ["take-camera-photo", "get-cameras", "GET-CAMERA", ""] {
        assert!(name.parse::<CommandKind>().is_err(), "{name:?} must be rejected");
    }
}
