//! devbroker host — entry point.
//!
//! Starts the serialized broker loop and wires the outside world to it. On
//! a real deployment the presentation framework supplies the surface handle
//! and the wireless stack calls into the chooser port; this headless binary
//! substitutes scripted adapters so the whole path can be run and observed
//! from a terminal.
//!
//! # Usage
//!
//! ```text
//! devbroker-host [OPTIONS]
//!
//! Options:
//!   --stale-warn-secs <SECS>  Warn when a pending selection older than this
//!                             is answered or cancelled [default: 30]
//! ```
//!
//! Log level is controlled by `RUST_LOG` (default `info`).

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use devbroker_core::{
    MediaDeviceInfo, MediaDeviceKind, PrinterDescriptor, WirelessDescriptor, TOPIC_IPC_EXAMPLE,
};
use devbroker_host::infrastructure::bridge::BridgeHost;
use devbroker_host::infrastructure::surface::{ScriptedPrintSubsystem, ScriptedSurface};
use devbroker_host::HostConfig;

/// Device access broker host process.
#[derive(Debug, Parser)]
#[command(
    name = "devbroker-host",
    about = "Brokers camera, printer, and wireless device access for a sandboxed presentation process",
    version
)]
struct Cli {
    /// Warn when a pending wireless selection older than this many seconds
    /// is answered or cancelled.
    #[arg(long, default_value_t = 30, env = "DEVBROKER_STALE_WARN_SECS")]
    stale_warn_secs: u64,
}

impl Cli {
    fn into_host_config(self) -> HostConfig {
        HostConfig {
            stale_selection_warn_after: Duration::from_secs(self.stale_warn_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging; level overridden by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_host_config();
    info!("devbroker host starting");

    // Scripted stand-ins for the presentation surface and the print stack.
    let surface = Arc::new(ScriptedSurface::new(vec![
        MediaDeviceInfo {
            id: "cam-integrated".to_string(),
            kind: MediaDeviceKind::VideoInput,
            label: "Integrated Camera".to_string(),
        },
        MediaDeviceInfo {
            id: "mic-integrated".to_string(),
            kind: MediaDeviceKind::AudioInput,
            label: "Integrated Microphone".to_string(),
        },
    ]));
    let printers = Arc::new(ScriptedPrintSubsystem::new(vec![PrinterDescriptor {
        name: "PDF".to_string(),
        display_name: "Print to PDF".to_string(),
    }]));

    let (host, handle, chooser_port) = BridgeHost::new(config, Some(surface), Some(printers));
    let mut host_task = tokio::spawn(host.run());

    // Simulated wireless stack: raise one chooser event and report how the
    // prompt eventually resolves (a Ctrl-C shutdown cancels it with "").
    if let Some(selection) = chooser_port.request_selection(vec![
        WirelessDescriptor::new("aa:bb:cc:dd:ee:ff", "demo headset"),
    ]) {
        tokio::spawn(async move {
            match selection.await {
                Ok(id) if id.is_empty() => info!("chooser prompt cancelled"),
                Ok(id) => info!("chooser prompt resolved with device {id}"),
                Err(_) => info!("chooser prompt dropped unresolved"),
            }
        });
    }

    // Startup smoke pass over the presentation-facing surface of the broker.
    let mut replies = handle.on(TOPIC_IPC_EXAMPLE);
    handle.send(TOPIC_IPC_EXAMPLE, json!("ping"));
    if let Some(reply) = replies.recv().await {
        info!("echo channel replied: {reply}");
    }

    let cameras = handle.get_camera().await.unwrap_or_default();
    let printer_list = handle.get_printers().await.unwrap_or_default();
    let wireless = handle.get_bluetooth_devices().await.unwrap_or_default();
    info!(
        cameras = cameras.len(),
        printers = printer_list.len(),
        pending_wireless = wireless.len(),
        "device snapshot"
    );

    info!("devbroker host ready, press Ctrl-C to exit");
    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("shutdown signal received"),
        _ = &mut host_task => warn!("host loop exited unexpectedly"),
    }

    // Dropping the handles closes the queue, which lets the loop cancel any
    // pending selection and drain out.
    drop(handle);
    drop(chooser_port);

    info!("devbroker host stopped");
    Ok(())
}
