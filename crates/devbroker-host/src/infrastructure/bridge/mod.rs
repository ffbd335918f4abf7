//! The bridge runtime: one serialized host loop and the handles around it.
//!
//! All bridge traffic funnels into a single queue consumed by one task:
//!
//! ```text
//! BridgeHandle ──invoke/send──┐
//!                             ├──► host event queue ──► BridgeHost::run
//! ChooserPort  ──chooser──────┘         (one task, serialized handlers)
//! ```
//!
//! Handlers therefore execute one at a time, in the order their messages
//! were dispatched onto the queue, and never interleave. That single task
//! also exclusively owns the selection coordinator's state, so the pending
//! selection slot needs no lock. There is no generic cancel-in-flight and
//! no timeout; the only cancellation anywhere is the coordinator's
//! overwrite rule.
//!
//! Routing is an exhaustive `match` on [`CommandKind`]: every command has
//! exactly one handler, and a command without a handler cannot be written.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use devbroker_core::{
    BridgeError, CommandKind, ConnectArgs, Invocation, Notification, PrintArgs,
    WirelessDescriptor, TOPIC_IPC_EXAMPLE,
};

use crate::application::select_wireless::{ChooserRequest, ChooserResolver, SelectionCoordinator};
use crate::application::{dispatch_print, enumerate_devices};
use crate::config::HostConfig;
use crate::infrastructure::surface::{PresentationSurface, PrintSubsystem};

mod handle;

pub use handle::BridgeHandle;

/// Topic subscriptions shared between the host loop (publisher) and the
/// presentation handles (subscribers).
pub(crate) type SubscriptionTable = Arc<Mutex<HashMap<String, mpsc::UnboundedSender<Value>>>>;

/// Everything that can arrive on the host loop's queue.
#[derive(Debug)]
pub(crate) enum HostEvent {
    Invocation(Invocation),
    Notification(Notification),
    Chooser(ChooserRequest),
}

/// Inbound capability handed to the host hardware layer.
///
/// The wireless stack calls [`request_selection`](Self::request_selection)
/// once per chooser event instead of showing its default prompt; the
/// returned receiver resolves with the chosen device id, or with `""` when
/// the selection is cancelled.
#[derive(Clone)]
pub struct ChooserPort {
    events: mpsc::UnboundedSender<HostEvent>,
}

impl ChooserPort {
    /// Defers a chooser event to the broker.
    ///
    /// Returns `None` when the host loop is gone, in which case the caller
    /// should fall back to cancelling its prompt. A closed receiver later on
    /// likewise means the selection died unresolved (host shutdown).
    pub fn request_selection(
        &self,
        candidates: Vec<WirelessDescriptor>,
    ) -> Option<oneshot::Receiver<String>> {
        let (resolver, rx) = ChooserResolver::new();
        let request = ChooserRequest {
            candidates,
            resolver,
        };
        match self.events.send(HostEvent::Chooser(request)) {
            Ok(()) => Some(rx),
            Err(_) => None,
        }
    }
}

/// The host side of the bridge: owns the queue, the coordinator, and the
/// port handles to the outside world.
pub struct BridgeHost {
    events: mpsc::UnboundedReceiver<HostEvent>,
    subscriptions: SubscriptionTable,
    coordinator: SelectionCoordinator,
    surface: Option<Arc<dyn PresentationSurface>>,
    printers: Option<Arc<dyn PrintSubsystem>>,
}

impl BridgeHost {
    /// Creates the host loop together with the presentation handle and the
    /// chooser port.
    ///
    /// `surface`/`printers` are `None` when the respective host resource
    /// does not exist; the affected queries then answer with empty lists.
    pub fn new(
        config: HostConfig,
        surface: Option<Arc<dyn PresentationSurface>>,
        printers: Option<Arc<dyn PrintSubsystem>>,
    ) -> (Self, BridgeHandle, ChooserPort) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let subscriptions: SubscriptionTable = Arc::new(Mutex::new(HashMap::new()));

        let host = Self {
            events: events_rx,
            subscriptions: Arc::clone(&subscriptions),
            coordinator: SelectionCoordinator::new()
                .with_stale_warning(config.stale_selection_warn_after),
            surface,
            printers,
        };
        let handle = BridgeHandle::new(events_tx.clone(), subscriptions);
        let port = ChooserPort { events: events_tx };

        (host, handle, port)
    }

    /// Runs the host loop until every handle and port has been dropped.
    ///
    /// Consumes `self`: the loop task is the sole owner of all mutable
    /// broker state. On exit a still-pending selection is cancelled so the
    /// OS prompt is not left hanging.
    pub async fn run(mut self) {
        info!("device broker host loop started");

        while let Some(event) = self.events.recv().await {
            match event {
                HostEvent::Invocation(invocation) => self.handle_invocation(invocation).await,
                HostEvent::Notification(notification) => self.handle_notification(notification),
                HostEvent::Chooser(request) => {
                    self.coordinator
                        .chooser_requested(request.candidates, request.resolver);
                }
            }
        }

        self.coordinator.shutdown();
        info!("device broker host loop stopped");
    }

    /// Answers one invocation. Runs to completion before the next queue
    /// entry is looked at.
    async fn handle_invocation(&mut self, invocation: Invocation) {
        let Invocation {
            id,
            command,
            args,
            reply,
        } = invocation;

        debug!(id, command = %command, "dispatching command");

        let result = match command {
            CommandKind::GetCamera => {
                encode(enumerate_devices::get_camera(self.surface.as_deref()).await)
            }
            CommandKind::GetPrinters => {
                encode(enumerate_devices::get_printers(self.printers.as_deref()).await)
            }
            CommandKind::GetBluetoothDevices => encode(self.coordinator.bluetooth_devices()),
            CommandKind::ConnectToBluetoothDevice => {
                decode_args::<ConnectArgs>(command, args).map(|args| {
                    let resolved = self.coordinator.connect(&args.device_id);
                    info!(device_id = %args.device_id, resolved, "connect-to-bluetooth-device handled");
                    Value::Null
                })
            }
            CommandKind::PrintFile => decode_args::<PrintArgs>(command, args).map(|args| {
                dispatch_print::print_file(&args);
                Value::Null
            }),
        };

        if reply.send(result).is_err() {
            debug!(id, "caller dropped before the reply was delivered");
        }
    }

    /// Handles a fire-and-forget notification.
    fn handle_notification(&self, notification: Notification) {
        match notification.topic.as_str() {
            TOPIC_IPC_EXAMPLE => {
                let text = notification
                    .payload
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| notification.payload.to_string());
                info!("IPC test: {text}");
                self.publish(
                    TOPIC_IPC_EXAMPLE,
                    Value::String("IPC test: pong".to_string()),
                );
            }
            other => {
                debug!(topic = other, "notification on unhandled topic ignored");
            }
        }
    }

    /// Publishes a payload to the topic's subscriber, if any. A subscriber
    /// that went away is unregistered on the spot.
    fn publish(&self, topic: &str, payload: Value) {
        let mut table = self.subscriptions.lock().expect("lock poisoned");
        if let Some(tx) = table.get(topic) {
            if tx.send(payload).is_err() {
                table.remove(topic);
            }
        }
    }
}

fn encode<T: serde::Serialize>(value: T) -> Result<Value, BridgeError> {
    serde_json::to_value(value).map_err(|e| BridgeError::Host(e.to_string()))
}

fn decode_args<T: serde::de::DeserializeOwned>(
    command: CommandKind,
    args: Value,
) -> Result<T, BridgeError> {
    serde_json::from_value(args)
        .map_err(|e| BridgeError::Host(format!("invalid {command} arguments: {e}")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
