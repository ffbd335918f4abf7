//! Domain types for the device access broker.
//!
//! Pure data with no OS or transport dependencies. Everything here is a
//! snapshot of what the host hardware stack reported at the moment of a
//! query; the broker never caches or deduplicates these records.

pub mod devices;
