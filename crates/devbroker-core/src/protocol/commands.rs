//! The fixed set of named commands understood by the host process.
//!
//! Every request from the presentation process is routed by one of these
//! tags to exactly one handler. The set is closed: a command outside this
//! enumeration cannot be constructed, so "no handler registered" is a
//! compile-time impossibility rather than a runtime failure mode. Unknown
//! command *names* are rejected when parsed at the boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Topic used by the fire-and-forget diagnostic echo channel.
///
/// The host replies on the same topic with a `IPC test: `-prefixed string.
pub const TOPIC_IPC_EXAMPLE: &str = "ipc-example";

/// All request/response commands the host answers.
///
/// The kebab-case wire names (`get-camera`, `connect-to-bluetooth-device`,
/// ...) are part of the compatibility contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandKind {
    /// Snapshot of video input devices visible to the presentation surface.
    GetCamera,
    /// Snapshot of printers known to the host print subsystem.
    GetPrinters,
    /// Candidates of the currently pending wireless chooser prompt, if any.
    GetBluetoothDevices,
    /// Answer the pending wireless chooser prompt with a chosen device id.
    ConnectToBluetoothDevice,
    /// Declared print command; accepted and completed with no action.
    PrintFile,
}

impl CommandKind {
    /// The exact wire name of this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::GetCamera => "get-camera",
            CommandKind::GetPrinters => "get-printers",
            CommandKind::GetBluetoothDevices => "get-bluetooth-devices",
            CommandKind::ConnectToBluetoothDevice => "connect-to-bluetooth-device",
            CommandKind::PrintFile => "print-file",
        }
    }

    /// All commands, in contract order. Useful for exhaustive tests.
    pub const ALL: [CommandKind; 5] = [
        CommandKind::GetCamera,
        CommandKind::GetPrinters,
        CommandKind::GetBluetoothDevices,
        CommandKind::ConnectToBluetoothDevice,
        CommandKind::PrintFile,
    ];
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command name: '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for CommandKind {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get-camera" => Ok(CommandKind::GetCamera),
            "get-printers" => Ok(CommandKind::GetPrinters),
            "get-bluetooth-devices" => Ok(CommandKind::GetBluetoothDevices),
            "connect-to-bluetooth-device" => Ok(CommandKind::ConnectToBluetoothDevice),
            "print-file" => Ok(CommandKind::PrintFile),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

// ── Typed argument payloads ───────────────────────────────────────────────────

/// Arguments for `connect-to-bluetooth-device`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectArgs {
    /// Id of the chosen device; must come from the pending candidate list.
    pub device_id: String,
}

/// Arguments for `print-file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintArgs {
    pub file_path: String,
    pub printer_name: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_the_contract_exactly() {
        assert_eq!(CommandKind::GetCamera.as_str(), "get-camera");
        assert_eq!(CommandKind::GetPrinters.as_str(), "get-printers");
        assert_eq!(
            CommandKind::GetBluetoothDevices.as_str(),
            "get-bluetooth-devices"
        );
        assert_eq!(
            CommandKind::ConnectToBluetoothDevice.as_str(),
            "connect-to-bluetooth-device"
        );
        assert_eq!(CommandKind::PrintFile.as_str(), "print-file");
    }

    #[test]
    fn test_every_command_round_trips_through_from_str() {
        for command in CommandKind::ALL {
            let parsed: CommandKind = command.as_str().parse().unwrap();
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn test_unknown_command_name_is_rejected() {
        // `take-camera-photo` was exposed by an early presentation build but
        // never had a host handler; it must fail at the parse boundary.
        let err = "take-camera-photo".parse::<CommandKind>().unwrap_err();
        assert_eq!(err, UnknownCommand("take-camera-photo".to_string()));
    }

    #[test]
    fn test_serde_uses_the_same_kebab_case_names() {
        for command in CommandKind::ALL {
            let json = serde_json::to_string(&command).unwrap();
            assert_eq!(json, format!("\"{}\"", command.as_str()));
        }
    }

    #[test]
    fn test_connect_args_use_camel_case_device_id() {
        let args: ConnectArgs = serde_json::from_str(r#"{"deviceId":"A"}"#).unwrap();
        assert_eq!(args.device_id, "A");
    }

    #[test]
    fn test_print_args_use_camel_case_field_names() {
        let args: PrintArgs =
            serde_json::from_str(r#"{"filePath":"/tmp/doc.pdf","printerName":"HP"}"#).unwrap();
        assert_eq!(args.file_path, "/tmp/doc.pdf");
        assert_eq!(args.printer_name, "HP");
    }
}
