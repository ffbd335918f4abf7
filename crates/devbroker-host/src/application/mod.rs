//! Application layer use cases for the host broker.
//!
//! Use cases here orchestrate domain types to answer presentation-process
//! requests. They depend on the port traits in `infrastructure::surface`
//! but contain no OS calls, no transport, and no channel plumbing; the
//! bridge loop in `infrastructure::bridge` drives them.
//!
//! - **`enumerate_devices`** – stateless snapshot queries for cameras and
//!   printers, normalized to empty results on any failure.
//!
//! - **`select_wireless`** – the single-slot chooser state machine. This is
//!   the only genuinely stateful piece of the broker.
//!
//! - **`dispatch_print`** – the declared-but-inert `print-file` handler.

pub mod dispatch_print;
pub mod enumerate_devices;
pub mod select_wireless;
