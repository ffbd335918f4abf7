//! # devbroker-core
//!
//! Shared library for the device access broker containing the command
//! vocabulary, device descriptor types, and the bridge message envelopes.
//!
//! This crate is used by the privileged host process and by anything that
//! talks to it over the bridge. It has zero dependencies on OS APIs or UI
//! frameworks.
//!
//! - **`protocol`** – the fixed set of named commands, the request/response
//!   and notification envelopes that carry them, and the failure taxonomy.
//!
//! - **`domain`** – the device descriptor types returned by enumeration and
//!   selection: cameras, printers, and short-range wireless devices.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `devbroker_core::CommandKind` instead of the full module path.
pub use domain::devices::{
    CameraDescriptor, MediaDeviceInfo, MediaDeviceKind, PrinterDescriptor, WirelessDescriptor,
};
pub use protocol::commands::{CommandKind, ConnectArgs, PrintArgs, TOPIC_IPC_EXAMPLE};
pub use protocol::envelope::{BridgeError, Invocation, Notification};
pub use protocol::sequence::CallIdCounter;
