//! Bridge protocol: command vocabulary, message envelopes, and call ids.
//!
//! The bridge is an in-process boundary rather than a network one, so there
//! is no byte-level codec here. What is fixed is the *vocabulary*: command
//! names are part of the compatibility contract with the presentation
//! process and must match exactly.

pub mod commands;
pub mod envelope;
pub mod sequence;
