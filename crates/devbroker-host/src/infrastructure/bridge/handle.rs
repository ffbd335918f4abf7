//! The presentation-side handle onto the bridge.
//!
//! [`BridgeHandle`] is what the sandboxed presentation process holds: the
//! ability to invoke named commands, fire notifications, and subscribe to
//! topics. It is cheaply cloneable; every clone feeds the same serialized
//! host queue.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use devbroker_core::{
    BridgeError, CallIdCounter, CameraDescriptor, CommandKind, ConnectArgs, Invocation,
    Notification, PrintArgs, PrinterDescriptor, WirelessDescriptor,
};

use super::{HostEvent, SubscriptionTable};

/// Handle used by the presentation side to talk to the host loop.
#[derive(Clone)]
pub struct BridgeHandle {
    events: mpsc::UnboundedSender<HostEvent>,
    subscriptions: SubscriptionTable,
    call_ids: Arc<CallIdCounter>,
}

impl BridgeHandle {
    pub(super) fn new(
        events: mpsc::UnboundedSender<HostEvent>,
        subscriptions: SubscriptionTable,
    ) -> Self {
        Self {
            events,
            subscriptions,
            call_ids: Arc::new(CallIdCounter::new()),
        }
    }

    /// Invokes a named command and suspends until the host loop answers.
    ///
    /// Never panics: a torn-down host loop surfaces as
    /// [`BridgeError::Unavailable`], everything else as the host's own
    /// reply. Many invocations may be outstanding at once; the host answers
    /// them one at a time in dispatch order.
    pub async fn invoke(&self, command: CommandKind, args: Value) -> Result<Value, BridgeError> {
        let id = self.call_ids.next();
        let (reply_tx, reply_rx) = oneshot::channel();

        debug!(id, command = %command, "invoking command");

        let invocation = Invocation {
            id,
            command,
            args,
            reply: reply_tx,
        };
        if self.events.send(HostEvent::Invocation(invocation)).is_err() {
            return Err(BridgeError::Unavailable);
        }

        reply_rx.await.map_err(|_| BridgeError::Unavailable)?
    }

    /// Fire-and-forget notification on a named topic. Never suspends; a
    /// dead host loop swallows the message.
    pub fn send(&self, topic: impl Into<String>, payload: Value) {
        let _ = self
            .events
            .send(HostEvent::Notification(Notification::new(topic, payload)));
    }

    /// Subscribes to a topic, returning the stream of payloads the host
    /// publishes on it.
    ///
    /// At most one subscription per topic is active: subscribing again
    /// replaces the previous one, whose receiver then sees end-of-stream.
    pub fn on(&self, topic: impl Into<String>) -> mpsc::UnboundedReceiver<Value> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscriptions
            .lock()
            .expect("lock poisoned")
            .insert(topic.into(), tx);
        rx
    }

    // ── Typed command wrappers ────────────────────────────────────────────────

    /// `get-camera`: snapshot of video input devices.
    pub async fn get_camera(&self) -> Result<Vec<CameraDescriptor>, BridgeError> {
        let value = self.invoke(CommandKind::GetCamera, Value::Null).await?;
        decode(value)
    }

    /// `get-printers`: snapshot of known printers.
    pub async fn get_printers(&self) -> Result<Vec<PrinterDescriptor>, BridgeError> {
        let value = self.invoke(CommandKind::GetPrinters, Value::Null).await?;
        decode(value)
    }

    /// `get-bluetooth-devices`: candidates of the pending chooser prompt.
    pub async fn get_bluetooth_devices(&self) -> Result<Vec<WirelessDescriptor>, BridgeError> {
        let value = self
            .invoke(CommandKind::GetBluetoothDevices, Value::Null)
            .await?;
        decode(value)
    }

    /// `connect-to-bluetooth-device`: answer the pending prompt.
    pub async fn connect_to_bluetooth_device(&self, device_id: &str) -> Result<(), BridgeError> {
        let args = serde_json::to_value(ConnectArgs {
            device_id: device_id.to_string(),
        })
        .map_err(|e| BridgeError::Host(e.to_string()))?;
        self.invoke(CommandKind::ConnectToBluetoothDevice, args)
            .await?;
        Ok(())
    }

    /// `print-file`: declared no-op print dispatch.
    pub async fn print_file(&self, file_path: &str, printer_name: &str) -> Result<(), BridgeError> {
        let args = serde_json::to_value(PrintArgs {
            file_path: file_path.to_string(),
            printer_name: printer_name.to_string(),
        })
        .map_err(|e| BridgeError::Host(e.to_string()))?;
        self.invoke(CommandKind::PrintFile, args).await?;
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, BridgeError> {
    serde_json::from_value(value).map_err(|e| BridgeError::Host(e.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
