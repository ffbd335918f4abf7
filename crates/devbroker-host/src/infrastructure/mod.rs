//! Infrastructure layer for the host broker.
//!
//! Contains the bridge runtime (the serialized event loop plus the handles
//! the presentation process and the hardware layer hold) and the port traits
//! behind which the actual OS integrations live.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `devbroker_core`, but must not be imported by the application layer
//! except through the port traits in `surface`.

pub mod bridge;
pub mod surface;
